//! Core projection engine for month-by-month wealth compounding

use serde::{Deserialize, Serialize};

use super::cashflows::{MonthRow, ProjectionPoint, ProjectionResult};
use super::state::{monthly_rate, round_cents, ProjectionState};
use crate::events::{CashFlowEvent, EventScheduler, MonthlyBoundary, DEFAULT_HORIZON_END_YEAR};

/// Inputs for one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    /// Starting principal
    pub initial_wealth: f64,

    /// Scheduled cash flows; order does not matter
    #[serde(default)]
    pub events: Vec<CashFlowEvent>,

    /// Nominal annual real growth rate (0.04 = 4%)
    #[serde(alias = "projectionRate")]
    pub annual_rate: f64,

    /// Last projected year, inclusive (default: 2060)
    #[serde(default, alias = "endYear", skip_serializing_if = "Option::is_none")]
    pub horizon_end_year: Option<i32>,
}

impl ProjectionRequest {
    pub fn new(initial_wealth: f64, annual_rate: f64) -> Self {
        Self {
            initial_wealth,
            events: Vec::new(),
            annual_rate,
            horizon_end_year: None,
        }
    }

    pub fn with_events(mut self, events: Vec<CashFlowEvent>) -> Self {
        self.events = events;
        self
    }

    pub fn with_end_year(mut self, end_year: i32) -> Self {
        self.horizon_end_year = Some(end_year);
        self
    }

    pub fn end_year(&self) -> i32 {
        self.horizon_end_year.unwrap_or(DEFAULT_HORIZON_END_YEAR)
    }
}

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// First simulated year (normally the current calendar year)
    pub as_of_year: i32,

    /// How MONTHLY events treat months inside their end year
    pub monthly_boundary: MonthlyBoundary,

    /// Whether to keep per-month rows
    pub detailed_output: bool,
}

impl ProjectionConfig {
    pub fn new(as_of_year: i32) -> Self {
        Self {
            as_of_year,
            monthly_boundary: MonthlyBoundary::default(),
            detailed_output: false,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Copy)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
    scheduler: EventScheduler,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            config,
            scheduler: EventScheduler::new(config.monthly_boundary),
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection from the as-of year through the request's horizon
    ///
    /// Each month the scheduled net lands first, then the whole balance grows
    /// by the monthly-equivalent rate. Values are rounded to cents only in the
    /// year-end snapshots. A horizon ending before the as-of year yields an
    /// empty result.
    pub fn simulate(&self, request: &ProjectionRequest) -> ProjectionResult {
        let start_year = self.config.as_of_year;
        let end_year = request.end_year();
        let rate = monthly_rate(request.annual_rate);

        let mut result = ProjectionResult::new(request.initial_wealth);
        if end_year < start_year {
            log::debug!(
                "horizon {end_year} ends before as-of year {start_year}, nothing to project"
            );
            return result;
        }

        log::debug!(
            "projecting {start_year}..={end_year} with {} events, monthly rate {rate:.6}",
            request.events.len()
        );

        let months = (start_year..=end_year).flat_map(|year| (1..=12u32).map(move |month| (year, month)));
        let opening = ProjectionState::opening(start_year, request.initial_wealth);

        months.fold(opening, |state, (year, month)| {
            let net = self.scheduler.net_contribution(&request.events, year, month);
            let (next, step) = state.advance(year, month, net, rate);

            if self.config.detailed_output {
                result.months.push(MonthRow {
                    year,
                    month,
                    bop_wealth: step.bop_wealth,
                    net_contribution: step.net_contribution,
                    growth: step.growth,
                    eop_wealth: step.eop_wealth,
                });
            }
            if month == 12 {
                result.points.push(ProjectionPoint {
                    year,
                    projected_value: round_cents(next.wealth),
                });
            }
            next
        });

        result
    }
}

/// Project `request` starting at `as_of_year` with the default configuration
pub fn simulate(request: &ProjectionRequest, as_of_year: i32) -> Vec<ProjectionPoint> {
    ProjectionEngine::new(ProjectionConfig::new(as_of_year))
        .simulate(request)
        .into_points()
}
