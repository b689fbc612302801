//! Client case data: goals, wallet holdings and projection parameters

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::events::CashFlowEvent;
use crate::projection::ProjectionRequest;

/// Default goal priority when none is stored
fn default_goal_priority() -> u8 {
    1
}

/// Category of a financial goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    Retirement,
    ShortTerm,
    MediumTerm,
    LongTerm,
    EmergencyFund,
    Education,
    RealEstate,
    #[default]
    Other,
}

/// A target amount the client wants to reach by a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub title: String,

    #[serde(rename = "type", default)]
    pub goal_type: GoalType,

    /// Amount to reach
    pub target_value: f64,

    /// Date to reach it by (only the year is scored)
    pub target_date: NaiveDate,

    /// 1 (highest) to 3
    #[serde(default = "default_goal_priority")]
    pub priority: u8,
}

impl Goal {
    pub fn new(title: impl Into<String>, target_value: f64, target_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            goal_type: GoalType::Other,
            target_value,
            target_date,
            priority: default_goal_priority(),
        }
    }

    pub fn target_year(&self) -> i32 {
        self.target_date.year()
    }
}

/// One asset-class holding in the client's wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletItem {
    pub asset_class: String,

    /// Share of the wallet, 0-100
    pub percentage: f64,

    /// Current market value
    pub value: f64,
}

/// Everything needed to run one client simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCase {
    /// Caller's identifier, carried through to the outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub initial_wealth: f64,

    #[serde(alias = "projectionRate")]
    pub annual_rate: f64,

    #[serde(default, alias = "endYear", skip_serializing_if = "Option::is_none")]
    pub horizon_end_year: Option<i32>,

    #[serde(default)]
    pub events: Vec<CashFlowEvent>,

    /// Goals in stored order; the first is the primary goal
    #[serde(default)]
    pub goals: Vec<Goal>,

    #[serde(default)]
    pub wallet: Vec<WalletItem>,
}

impl ClientCase {
    pub fn new(initial_wealth: f64, annual_rate: f64) -> Self {
        Self {
            client_id: None,
            name: None,
            initial_wealth,
            annual_rate,
            horizon_end_year: None,
            events: Vec::new(),
            goals: Vec::new(),
            wallet: Vec::new(),
        }
    }

    /// Engine input for this case
    pub fn projection_request(&self) -> ProjectionRequest {
        ProjectionRequest {
            initial_wealth: self.initial_wealth,
            events: self.events.clone(),
            annual_rate: self.annual_rate,
            horizon_end_year: self.horizon_end_year,
        }
    }

    /// Label for logs and reports
    pub fn label(&self) -> &str {
        self.client_id
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("<unnamed>")
    }

    pub fn primary_goal(&self) -> Option<&Goal> {
        self.goals.first()
    }
}
