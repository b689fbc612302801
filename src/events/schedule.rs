//! Monthly event scheduling
//!
//! Decides which events fire in a given calendar month. Months are 1-based
//! (January = 1) to line up with `chrono::Datelike::month`.

use serde::{Deserialize, Serialize};

use super::data::{CashFlowEvent, Frequency};

/// How a MONTHLY event's end month is honored inside its end year
///
/// The start side is always year-granular: a MONTHLY event fires every
/// month of its start year, including months before its start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyBoundary {
    /// Only the calendar year is checked: an event ending in June still
    /// fires July through December of that year
    YearGranular,
    /// The end month is also enforced in the end year
    #[default]
    MonthGranular,
}

/// Event scheduler for one projection run
#[derive(Debug, Clone, Copy, Default)]
pub struct EventScheduler {
    boundary: MonthlyBoundary,
}

impl EventScheduler {
    pub fn new(boundary: MonthlyBoundary) -> Self {
        Self { boundary }
    }

    pub fn boundary(&self) -> MonthlyBoundary {
        self.boundary
    }

    /// Whether `event` fires in `(year, month)`
    pub fn is_active(&self, event: &CashFlowEvent, year: i32, month: u32) -> bool {
        if year < event.start_year() || year > event.end_year() {
            return false;
        }

        match event.frequency {
            Frequency::Once => year == event.start_year() && month == event.start_month(),
            Frequency::Yearly => month == event.start_month(),
            Frequency::Monthly => match self.boundary {
                MonthlyBoundary::YearGranular => true,
                MonthlyBoundary::MonthGranular => {
                    (year, month) <= (event.end_year(), event.end_month())
                }
            },
        }
    }

    /// Events firing in `(year, month)`, in input order
    pub fn active_events_for_month<'a>(
        &self,
        events: &'a [CashFlowEvent],
        year: i32,
        month: u32,
    ) -> Vec<&'a CashFlowEvent> {
        events
            .iter()
            .filter(|event| self.is_active(event, year, month))
            .collect()
    }

    /// Sum of amounts of every event firing in `(year, month)`
    pub fn net_contribution(&self, events: &[CashFlowEvent], year: i32, month: u32) -> f64 {
        events
            .iter()
            .filter(|event| self.is_active(event, year, month))
            .fold(0.0, |net, event| net + event.amount)
    }
}

/// Active events for a month using the default boundary policy
pub fn active_events_for_month(
    events: &[CashFlowEvent],
    year: i32,
    month: u32,
) -> Vec<&CashFlowEvent> {
    EventScheduler::default().active_events_for_month(events, year, month)
}

/// Net contribution for a month using the default boundary policy
pub fn net_contribution(events: &[CashFlowEvent], year: i32, month: u32) -> f64 {
    EventScheduler::default().net_contribution(events, year, month)
}
