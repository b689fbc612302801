//! Cash-flow event data structures

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Year used when an event or projection has no explicit end
pub const DEFAULT_HORIZON_END_YEAR: i32 = 2060;

/// Recurrence of a cash-flow event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    /// Applied once, in the start month
    Once,
    /// Applied every month between start and end
    Monthly,
    /// Applied every year in the start month
    Yearly,
}

impl Frequency {
    /// Get the string representation used in stored records
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Once => "ONCE",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ONCE" => Ok(Frequency::Once),
            "MONTHLY" => Ok(Frequency::Monthly),
            "YEARLY" => Ok(Frequency::Yearly),
            _ => Err(ProjectionError::UnknownFrequency(s.to_string())),
        }
    }
}

/// A scheduled contribution (positive) or withdrawal (negative)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEvent {
    /// Signed amount applied each time the event fires
    #[serde(alias = "value")]
    pub amount: f64,

    /// Recurrence
    pub frequency: Frequency,

    /// First month the event can fire (day is ignored)
    pub start_date: NaiveDate,

    /// Last date the event can fire; `None` runs to the default horizon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl CashFlowEvent {
    pub fn new(amount: f64, frequency: Frequency, start_date: NaiveDate) -> Self {
        Self {
            amount,
            frequency,
            start_date,
            end_date: None,
        }
    }

    /// Builder-style end date
    pub fn until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn start_year(&self) -> i32 {
        self.start_date.year()
    }

    /// Start month, 1-based
    pub fn start_month(&self) -> u32 {
        self.start_date.month()
    }

    /// End year, falling back to the default horizon when open-ended
    pub fn end_year(&self) -> i32 {
        self.end_date
            .map(|d| d.year())
            .unwrap_or(DEFAULT_HORIZON_END_YEAR)
    }

    /// End month, 1-based. Open-ended events run through December.
    pub fn end_month(&self) -> u32 {
        self.end_date.map(|d| d.month()).unwrap_or(12)
    }

    pub fn is_contribution(&self) -> bool {
        self.amount > 0.0
    }
}
