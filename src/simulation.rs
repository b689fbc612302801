//! Full client simulation: projection, alignment and suggestions
//!
//! Mirrors what the application does when an advisor saves a simulation:
//! the alignment score uses the goal nearest in time, while suggestions are
//! computed against the client's primary (first) goal.

use serde::{Deserialize, Serialize};

use crate::alignment::{self, AlignmentCategory};
use crate::client::ClientCase;
use crate::projection::{ProjectionEngine, ProjectionResult, ProjectionSummary};
use crate::suggestions::{self, Suggestion};

/// Combined result of one client simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    pub as_of_year: i32,
    pub annual_rate: f64,
    pub projection: ProjectionResult,
    pub summary: ProjectionSummary,

    /// Score against the nearest goal, 0 without goals
    pub alignment_score: f64,
    pub alignment_category: AlignmentCategory,

    /// Score of current holdings against all goals
    pub wallet_alignment: f64,

    pub suggestions: Vec<Suggestion>,
}

/// Run one client case through the engine, scorer and suggestion generator
pub fn evaluate(engine: &ProjectionEngine, case: &ClientCase) -> SimulationOutcome {
    let as_of_year = engine.config().as_of_year;
    let projection = engine.simulate(&case.projection_request());

    let alignment_score = alignment::nearest_goal(&case.goals, as_of_year)
        .map(|goal| alignment::score_goal(&projection.points, goal))
        .unwrap_or(0.0);

    let suggestions = match case.primary_goal() {
        Some(goal) => suggestions::generate(
            &projection.points,
            goal.target_year(),
            goal.target_value,
            alignment_score,
            as_of_year,
        ),
        None => Vec::new(),
    };

    log::debug!(
        "case {}: {} years, alignment {alignment_score:.1}, {} suggestions",
        case.label(),
        projection.points.len(),
        suggestions.len()
    );

    SimulationOutcome {
        client_id: case.client_id.clone(),
        as_of_year,
        annual_rate: case.annual_rate,
        summary: projection.summary(),
        projection,
        alignment_score,
        alignment_category: AlignmentCategory::from_score(alignment_score),
        wallet_alignment: alignment::wallet_alignment(&case.goals, &case.wallet),
        suggestions,
    }
}
