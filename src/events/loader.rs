//! Load cash-flow events from CSV exports of stored event records

use super::{CashFlowEvent, Frequency};
use crate::error::{ProjectionError, Result};
use chrono::{DateTime, NaiveDate};
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the event export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "value")]
    value: f64,
    #[serde(rename = "frequency")]
    frequency: String,
    #[serde(rename = "startDate")]
    start_date: String,
    #[serde(rename = "endDate", default)]
    end_date: Option<String>,
    #[serde(rename = "isActive", default)]
    is_active: Option<bool>,
}

impl CsvRow {
    fn to_event(self) -> Result<CashFlowEvent> {
        let frequency: Frequency = self.frequency.parse()?;
        let start_date = parse_date(&self.start_date)?;
        let end_date = match self.end_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_date(raw)?),
        };

        Ok(CashFlowEvent {
            amount: self.value,
            frequency,
            start_date,
            end_date,
        })
    }
}

/// Parse a stored date, either `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| ProjectionError::InvalidDate(raw.to_string()))
}

/// Load active events from a CSV file
pub fn load_events<P: AsRef<Path>>(path: P) -> Result<Vec<CashFlowEvent>> {
    let reader = Reader::from_path(path)?;
    collect_events(reader)
}

/// Load active events from any reader (e.g., string buffer, network stream)
pub fn load_events_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<CashFlowEvent>> {
    collect_events(Reader::from_reader(reader))
}

fn collect_events<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<CashFlowEvent>> {
    let mut events = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        // Inactive events are excluded from projections
        if row.is_active == Some(false) {
            continue;
        }
        events.push(row.to_event()?);
    }

    log::debug!("loaded {} events", events.len());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
value,frequency,startDate,endDate,isActive
1000,MONTHLY,2024-01-01,2024-06-30,true
-5000,ONCE,2024-06-01T00:00:00Z,,true
250,YEARLY,2024-03-01,,false
10000,YEARLY,2025-01-15,,
";

    #[test]
    fn test_load_events_from_reader() {
        let events = load_events_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(events.len(), 3);

        assert_eq!(events[0].frequency, Frequency::Monthly);
        assert_eq!(events[0].end_date, NaiveDate::from_ymd_opt(2024, 6, 30));

        assert_eq!(events[1].amount, -5000.0);
        assert_eq!(events[1].start_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(events[1].end_date.is_none());

        assert_eq!(events[2].amount, 10_000.0);
    }

    #[test]
    fn test_unknown_frequency_rejected() {
        let csv = "value,frequency,startDate,endDate\n100,WEEKLY,2024-01-01,\n";
        let err = load_events_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::UnknownFrequency(f) if f == "WEEKLY"));
    }

    #[test]
    fn test_bad_date_rejected() {
        let csv = "value,frequency,startDate,endDate\n100,ONCE,01/02/2024,\n";
        let err = load_events_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidDate(_)));
    }
}
