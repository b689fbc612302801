//! Projection output structures

use serde::{Deserialize, Serialize};

/// Year-end projected balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: i32,
    /// Balance after all 12 months of the year, rounded to cents
    pub projected_value: f64,
}

/// A single simulated month, kept only when detailed output is requested
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRow {
    pub year: i32,
    /// Month within the year (1-12)
    pub month: u32,
    pub bop_wealth: f64,
    pub net_contribution: f64,
    pub growth: f64,
    pub eop_wealth: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Starting principal
    pub initial_wealth: f64,

    /// One point per projected year, ascending
    pub points: Vec<ProjectionPoint>,

    /// Monthly detail (empty unless detailed output is on)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub months: Vec<MonthRow>,
}

impl ProjectionResult {
    pub fn new(initial_wealth: f64) -> Self {
        Self {
            initial_wealth,
            points: Vec::new(),
            months: Vec::new(),
        }
    }

    /// Projected value at `year`, if it lies inside the horizon
    pub fn value_at(&self, year: i32) -> Option<f64> {
        value_at(&self.points, year)
    }

    pub fn into_points(self) -> Vec<ProjectionPoint> {
        self.points
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary::from_points(self.initial_wealth, &self.points)
    }
}

/// Value of the point for `year` in a projection series
pub fn value_at(points: &[ProjectionPoint], year: i32) -> Option<f64> {
    points
        .iter()
        .find(|p| p.year == year)
        .map(|p| p.projected_value)
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub initial_wealth: f64,
    /// Last year's projected value, 0 for an empty series
    pub final_value: f64,
    pub total_growth: f64,
    pub years_projected: usize,
}

impl ProjectionSummary {
    pub fn from_points(initial_wealth: f64, points: &[ProjectionPoint]) -> Self {
        let final_value = points.last().map(|p| p.projected_value).unwrap_or(0.0);
        Self {
            initial_wealth,
            final_value,
            total_growth: final_value - initial_wealth,
            years_projected: points.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<ProjectionPoint> {
        vec![
            ProjectionPoint { year: 2024, projected_value: 104_000.0 },
            ProjectionPoint { year: 2025, projected_value: 108_160.0 },
        ]
    }

    #[test]
    fn test_value_at() {
        let pts = points();
        assert_eq!(value_at(&pts, 2025), Some(108_160.0));
        assert_eq!(value_at(&pts, 2030), None);
    }

    #[test]
    fn test_summary() {
        let result = ProjectionResult {
            initial_wealth: 100_000.0,
            points: points(),
            months: Vec::new(),
        };
        let summary = result.summary();

        assert_eq!(summary.final_value, 108_160.0);
        assert_eq!(summary.total_growth, 8_160.0);
        assert_eq!(summary.years_projected, 2);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ProjectionResult::new(50_000.0).summary();
        assert_eq!(summary.final_value, 0.0);
        assert_eq!(summary.total_growth, -50_000.0);
        assert_eq!(summary.years_projected, 0);
    }

    #[test]
    fn test_point_json_fields() {
        let json = serde_json::to_value(points()[0]).unwrap();
        assert_eq!(json["year"], 2024);
        assert_eq!(json["projectedValue"], 104_000.0);
    }
}
