//! Cash-flow events and monthly scheduling

mod data;
mod schedule;
pub mod loader;

pub use data::{CashFlowEvent, Frequency, DEFAULT_HORIZON_END_YEAR};
pub use schedule::{active_events_for_month, net_contribution, EventScheduler, MonthlyBoundary};
pub use loader::{load_events, load_events_from_reader, parse_date};
