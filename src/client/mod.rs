//! Client case data structures and case-file loading

mod data;
pub mod loader;

pub use data::{ClientCase, Goal, GoalType, WalletItem};
pub use loader::{load_case, load_case_from_reader, load_cases, load_cases_from_reader};
