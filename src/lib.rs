//! Wealth Projection - deterministic projection engine for advisor simulations
//!
//! This library provides:
//! - Monthly scheduling of one-off, monthly and yearly cash-flow events
//! - Month-by-month compounding with year-end projected balances
//! - Goal alignment scores and wallet alignment
//! - Advisor suggestions derived from the projected gap to a goal
//! - Batch and rate-sweep runners for portfolios of client cases

pub mod error;
pub mod events;
pub mod projection;
pub mod alignment;
pub mod suggestions;
pub mod client;
pub mod validation;
pub mod simulation;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use events::{CashFlowEvent, Frequency, MonthlyBoundary, DEFAULT_HORIZON_END_YEAR};
pub use projection::{simulate, ProjectionConfig, ProjectionEngine, ProjectionPoint, ProjectionRequest};
pub use alignment::{AlignmentCategory, AlignmentOverview};
pub use suggestions::{Suggestion, SuggestionKind};
pub use client::{ClientCase, Goal, WalletItem};
pub use simulation::SimulationOutcome;
pub use scenario::ScenarioRunner;
