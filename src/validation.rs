//! Range checks applied by callers before invoking the engine
//!
//! The engine itself assumes pre-validated input; nothing here is called
//! from `projection`.

use crate::client::{ClientCase, Goal, WalletItem};
use crate::error::{ProjectionError, Result};
use crate::events::{CashFlowEvent, Frequency, DEFAULT_HORIZON_END_YEAR};
use crate::projection::ProjectionRequest;

/// Allowed slack when wallet percentages are summed
const WALLET_TOTAL_TOLERANCE: f64 = 0.01;

/// Longest accepted horizon, counted from the as-of year
pub const MAX_HORIZON_YEARS: i32 = 100;

/// Validate projection parameters, the horizon and every event
pub fn validate_request(request: &ProjectionRequest, as_of_year: i32) -> Result<()> {
    check_parameters(request.initial_wealth, request.annual_rate)?;
    validate_horizon(as_of_year, request.end_year())?;
    validate_events(&request.events)
}

/// Validate a full client case, including horizon, goals and wallet
pub fn validate_case(case: &ClientCase, as_of_year: i32) -> Result<()> {
    let end_year = case.horizon_end_year.unwrap_or(DEFAULT_HORIZON_END_YEAR);
    let outcome = check_parameters(case.initial_wealth, case.annual_rate)
        .and_then(|_| validate_horizon(as_of_year, end_year))
        .and_then(|_| validate_events(&case.events))
        .and_then(|_| {
            case.goals
                .iter()
                .enumerate()
                .try_for_each(|(i, goal)| validate_goal(i, goal))
        })
        .and_then(|_| validate_wallet(&case.wallet));

    if let Err(err) = &outcome {
        log::warn!("case {} rejected: {err}", case.label());
    }
    outcome
}

/// The last projected year must fall within `MAX_HORIZON_YEARS` of the
/// as-of year
pub fn validate_horizon(as_of_year: i32, end_year: i32) -> Result<()> {
    if end_year < as_of_year {
        return Err(ProjectionError::validation(
            "endYear",
            format!("{end_year} is before the as-of year {as_of_year}"),
        ));
    }
    // i64 so that extreme years cannot overflow the span
    if i64::from(end_year) - i64::from(as_of_year) > i64::from(MAX_HORIZON_YEARS) {
        return Err(ProjectionError::validation(
            "endYear",
            format!("{end_year} is more than {MAX_HORIZON_YEARS} years after {as_of_year}"),
        ));
    }
    Ok(())
}

pub fn validate_events(events: &[CashFlowEvent]) -> Result<()> {
    events
        .iter()
        .enumerate()
        .try_for_each(|(i, event)| validate_event(i, event))
}

pub fn validate_event(index: usize, event: &CashFlowEvent) -> Result<()> {
    if event.amount == 0.0 || !event.amount.is_finite() {
        return Err(ProjectionError::validation(
            format!("events[{index}].amount"),
            "must be a non-zero number",
        ));
    }
    if let Some(end) = event.end_date {
        if event.frequency != Frequency::Once && end <= event.start_date {
            return Err(ProjectionError::validation(
                format!("events[{index}].endDate"),
                "must be after the start date",
            ));
        }
    }
    Ok(())
}

pub fn validate_goal(index: usize, goal: &Goal) -> Result<()> {
    if !(goal.target_value > 0.0) {
        return Err(ProjectionError::validation(
            format!("goals[{index}].targetValue"),
            "must be positive",
        ));
    }
    if !(1..=3).contains(&goal.priority) {
        return Err(ProjectionError::validation(
            format!("goals[{index}].priority"),
            "must be between 1 and 3",
        ));
    }
    Ok(())
}

/// Each holding in range, and a non-empty wallet must total 100%
pub fn validate_wallet(wallet: &[WalletItem]) -> Result<()> {
    for (i, item) in wallet.iter().enumerate() {
        if !(0.0..=100.0).contains(&item.percentage) {
            return Err(ProjectionError::validation(
                format!("wallet[{i}].percentage"),
                "must be between 0 and 100",
            ));
        }
        if !(item.value >= 0.0) {
            return Err(ProjectionError::validation(
                format!("wallet[{i}].value"),
                "must not be negative",
            ));
        }
    }

    if wallet.is_empty() {
        return Ok(());
    }
    let total: f64 = wallet.iter().map(|w| w.percentage).sum();
    if (total - 100.0).abs() >= WALLET_TOTAL_TOLERANCE {
        return Err(ProjectionError::validation(
            "wallet",
            format!("percentages must total 100, got {total}"),
        ));
    }
    Ok(())
}

fn check_parameters(initial_wealth: f64, annual_rate: f64) -> Result<()> {
    if !(initial_wealth >= 0.0) || !initial_wealth.is_finite() {
        return Err(ProjectionError::validation(
            "initialWealth",
            "must be zero or positive",
        ));
    }
    if !(0.0..=1.0).contains(&annual_rate) {
        return Err(ProjectionError::validation(
            "annualRate",
            "must be between 0 and 1",
        ));
    }
    Ok(())
}
