//! Projection engine for year-by-year wealth curves

mod state;
mod engine;
mod cashflows;

pub use state::{monthly_rate, round_cents, MonthStep, ProjectionState};
pub use engine::{simulate, ProjectionConfig, ProjectionEngine, ProjectionRequest};
pub use cashflows::{value_at, MonthRow, ProjectionPoint, ProjectionResult, ProjectionSummary};
