//! Advisor suggestions derived from the gap between projection and goal

use serde::{Deserialize, Serialize};

use crate::projection::{value_at, ProjectionPoint};

/// Scores at or above this need no suggestions
pub const WELL_ALIGNED_SCORE: f64 = 90.0;

/// Below this, an increase-contribution suggestion is top priority
const LOW_ALIGNMENT_SCORE: f64 = 50.0;

/// Below this, the investment strategy should be reviewed
const REVIEW_STRATEGY_SCORE: f64 = 70.0;

/// Below this with the goal close, action is urgent
const URGENT_SCORE: f64 = 80.0;

/// Goals fewer than this many years away count as near
const NEAR_GOAL_YEARS: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionKind {
    IncreaseContribution,
    ReviewStrategy,
    UrgentAction,
}

/// A recommendation for the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,

    pub description: String,

    /// Monetary gap behind the suggestion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<f64>,

    /// 1 (highest) to 3
    pub priority: u8,
}

/// Suggestions for closing the gap to a target
///
/// Every applicable rule fires independently, so a client can receive
/// several suggestions at once.
pub fn generate(
    projection: &[ProjectionPoint],
    target_year: i32,
    target_value: f64,
    alignment_score: f64,
    as_of_year: i32,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    if alignment_score >= WELL_ALIGNED_SCORE {
        return suggestions;
    }

    let projected = value_at(projection, target_year).unwrap_or(0.0);
    let gap = target_value - projected;
    let years_remaining = target_year - as_of_year;

    if gap > 0.0 && years_remaining > 0 {
        let monthly_contribution = gap / (years_remaining as f64 * 12.0);
        suggestions.push(Suggestion {
            kind: SuggestionKind::IncreaseContribution,
            description: format!(
                "Increase the monthly contribution by {monthly_contribution:.2} to reach the goal"
            ),
            impact: Some(gap),
            priority: if alignment_score < LOW_ALIGNMENT_SCORE { 1 } else { 2 },
        });
    }

    if alignment_score < REVIEW_STRATEGY_SCORE {
        suggestions.push(Suggestion {
            kind: SuggestionKind::ReviewStrategy,
            description: "Consider reviewing the investment strategy to improve alignment".to_string(),
            impact: None,
            priority: 1,
        });
    }

    if years_remaining < NEAR_GOAL_YEARS && alignment_score < URGENT_SCORE {
        suggestions.push(Suggestion {
            kind: SuggestionKind::UrgentAction,
            description: "Goal is near with low alignment; urgent action needed".to_string(),
            impact: None,
            priority: 1,
        });
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(value: f64) -> Vec<ProjectionPoint> {
        vec![
            ProjectionPoint { year: 2026, projected_value: value },
            ProjectionPoint { year: 2030, projected_value: value },
        ]
    }

    fn kinds(suggestions: &[Suggestion]) -> Vec<SuggestionKind> {
        suggestions.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_well_aligned_has_no_suggestions() {
        assert!(generate(&series(95_000.0), 2030, 100_000.0, 95.0, 2024).is_empty());
        assert!(generate(&series(90_000.0), 2030, 100_000.0, 90.0, 2024).is_empty());
    }

    #[test]
    fn test_moderate_gap_far_goal() {
        let suggestions = generate(&series(85_000.0), 2030, 100_000.0, 85.0, 2024);

        assert_eq!(kinds(&suggestions), vec![SuggestionKind::IncreaseContribution]);
        let s = &suggestions[0];
        assert_eq!(s.priority, 2);
        assert_relative_eq!(s.impact.unwrap(), 15_000.0);
        // 15000 over 6 years of months
        assert!(s.description.contains("208.33"), "{}", s.description);
    }

    #[test]
    fn test_low_alignment_fires_all_rules() {
        let suggestions = generate(&series(40_000.0), 2026, 100_000.0, 40.0, 2024);

        assert_eq!(
            kinds(&suggestions),
            vec![
                SuggestionKind::IncreaseContribution,
                SuggestionKind::ReviewStrategy,
                SuggestionKind::UrgentAction,
            ]
        );
        assert!(suggestions.iter().all(|s| s.priority == 1));
        assert_relative_eq!(suggestions[0].impact.unwrap(), 60_000.0);
    }

    #[test]
    fn test_goal_in_past_skips_contribution() {
        let suggestions = generate(&series(60_000.0), 2023, 100_000.0, 60.0, 2024);
        assert_eq!(
            kinds(&suggestions),
            vec![SuggestionKind::ReviewStrategy, SuggestionKind::UrgentAction]
        );
    }

    #[test]
    fn test_near_goal_between_80_and_90_not_urgent() {
        let suggestions = generate(&series(85_000.0), 2026, 100_000.0, 85.0, 2024);
        assert!(!kinds(&suggestions).contains(&SuggestionKind::UrgentAction));
    }

    #[test]
    fn test_missing_year_uses_full_target_as_gap() {
        let suggestions = generate(&series(50_000.0), 2040, 120_000.0, 0.0, 2024);
        assert_relative_eq!(suggestions[0].impact.unwrap(), 120_000.0);
        assert!(suggestions[0].description.contains("625.00"));
    }

    #[test]
    fn test_suggestion_json_shape() {
        let s = Suggestion {
            kind: SuggestionKind::UrgentAction,
            description: "x".into(),
            impact: None,
            priority: 1,
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["type"], "URGENT_ACTION");
        assert!(json.get("impact").is_none());
    }
}
