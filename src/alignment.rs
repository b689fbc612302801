//! Goal alignment scoring
//!
//! Scores compare a projected balance against a goal's target value and are
//! reported as a percentage capped at 100.

use serde::{Deserialize, Serialize};

use crate::client::{Goal, WalletItem};
use crate::projection::{value_at, ProjectionPoint};

/// Upper bound of every alignment score
pub const MAX_SCORE: f64 = 100.0;

/// Alignment of `projection` with a target value at `target_year`
///
/// A target year outside the projected horizon counts as a projected value
/// of 0. A zero target scores 0.
pub fn score(projection: &[ProjectionPoint], target_year: i32, target_value: f64) -> f64 {
    if target_value == 0.0 {
        return 0.0;
    }
    let projected = value_at(projection, target_year).unwrap_or(0.0);
    ratio_score(projected, target_value)
}

/// Alignment of `projection` with `goal`
pub fn score_goal(projection: &[ProjectionPoint], goal: &Goal) -> f64 {
    score(projection, goal.target_year(), goal.target_value)
}

/// Goal whose target year is closest to `as_of_year`; ties keep the earlier goal
pub fn nearest_goal(goals: &[Goal], as_of_year: i32) -> Option<&Goal> {
    goals.iter().reduce(|nearest, goal| {
        let distance = (goal.target_year() - as_of_year).abs();
        let nearest_distance = (nearest.target_year() - as_of_year).abs();
        if distance < nearest_distance {
            goal
        } else {
            nearest
        }
    })
}

/// Current wallet value against the sum of all goal targets
pub fn wallet_alignment(goals: &[Goal], wallet: &[WalletItem]) -> f64 {
    let total_goal_value: f64 = goals.iter().map(|g| g.target_value).sum();
    if total_goal_value == 0.0 {
        return 0.0;
    }
    let total_wallet_value: f64 = wallet.iter().map(|w| w.value).sum();
    ratio_score(total_wallet_value, total_goal_value)
}

fn ratio_score(actual: f64, target: f64) -> f64 {
    (actual / target * 100.0).clamp(0.0, MAX_SCORE)
}

/// Qualitative bucket for an alignment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentCategory {
    /// Above 90%
    WellAligned,
    /// 70% to 90%
    ModeratelyAligned,
    /// 50% to 70%
    PoorlyAligned,
    /// Below 50%
    Misaligned,
}

impl AlignmentCategory {
    /// Every category, best first
    pub const ALL: [AlignmentCategory; 4] = [
        AlignmentCategory::WellAligned,
        AlignmentCategory::ModeratelyAligned,
        AlignmentCategory::PoorlyAligned,
        AlignmentCategory::Misaligned,
    ];

    pub fn from_score(score: f64) -> Self {
        if score > 90.0 {
            AlignmentCategory::WellAligned
        } else if score >= 70.0 {
            AlignmentCategory::ModeratelyAligned
        } else if score >= 50.0 {
            AlignmentCategory::PoorlyAligned
        } else {
            AlignmentCategory::Misaligned
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlignmentCategory::WellAligned => "Well aligned",
            AlignmentCategory::ModeratelyAligned => "Moderately aligned",
            AlignmentCategory::PoorlyAligned => "Poorly aligned",
            AlignmentCategory::Misaligned => "Misaligned",
        }
    }

    /// Display color used by dashboards
    pub fn color(&self) -> &'static str {
        match self {
            AlignmentCategory::WellAligned => "green",
            AlignmentCategory::ModeratelyAligned => "yellow-light",
            AlignmentCategory::PoorlyAligned => "yellow-dark",
            AlignmentCategory::Misaligned => "red",
        }
    }
}

/// Category distribution and average score across a portfolio of clients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentOverview {
    pub clients: usize,
    /// Mean score, 0 for an empty portfolio
    pub average_score: f64,
    /// Client count per category, in `AlignmentCategory::ALL` order
    pub distribution: Vec<(AlignmentCategory, usize)>,
}

impl AlignmentOverview {
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut counts = [0usize; 4];
        let (clients, total) = scores.into_iter().fold((0usize, 0.0), |(n, sum), score| {
            let category = AlignmentCategory::from_score(score);
            if let Some(i) = AlignmentCategory::ALL.iter().position(|c| *c == category) {
                counts[i] += 1;
            }
            (n + 1, sum + score)
        });

        Self {
            clients,
            average_score: if clients == 0 { 0.0 } else { total / clients as f64 },
            distribution: AlignmentCategory::ALL.into_iter().zip(counts).collect(),
        }
    }

    pub fn count(&self, category: AlignmentCategory) -> usize {
        self.distribution
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }
}
