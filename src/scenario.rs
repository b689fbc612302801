//! Scenario runner for batch re-projection
//!
//! Each simulation is independent, so batches and rate sweeps fan out over
//! the rayon thread pool with no coordination.

use rayon::prelude::*;
use std::time::Instant;

use crate::client::ClientCase;
use crate::error::Result;
use crate::projection::{ProjectionConfig, ProjectionEngine};
use crate::simulation::{evaluate, SimulationOutcome};
use crate::validation::validate_case;

/// Batch runner sharing one projection configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionConfig::new(2025));
///
/// let outcomes = runner.run_batch(&cases);
/// let sweep = runner.run_rate_sweep(&case, &[0.03, 0.04, 0.05]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }

    /// Run a single client case
    pub fn run(&self, case: &ClientCase) -> SimulationOutcome {
        evaluate(&self.engine, case)
    }

    /// Run many client cases in parallel; output order matches input order
    pub fn run_batch(&self, cases: &[ClientCase]) -> Vec<SimulationOutcome> {
        let start = Instant::now();
        let outcomes: Vec<_> = cases.par_iter().map(|case| self.run(case)).collect();
        log::info!("projected {} cases in {:?}", cases.len(), start.elapsed());
        outcomes
    }

    /// Validate, then run, each case; rejected cases keep their error
    pub fn run_batch_checked(&self, cases: &[ClientCase]) -> Vec<Result<SimulationOutcome>> {
        let start = Instant::now();
        let as_of_year = self.config().as_of_year;
        let outcomes: Vec<_> = cases
            .par_iter()
            .map(|case| validate_case(case, as_of_year).map(|_| self.run(case)))
            .collect();

        let rejected = outcomes.iter().filter(|o| o.is_err()).count();
        log::info!(
            "projected {} cases ({rejected} rejected) in {:?}",
            cases.len(),
            start.elapsed()
        );
        outcomes
    }

    /// Run one case at several annual rates
    pub fn run_rate_sweep(&self, case: &ClientCase, rates: &[f64]) -> Vec<SimulationOutcome> {
        rates
            .par_iter()
            .map(|&rate| {
                let mut scenario = case.clone();
                scenario.annual_rate = rate;
                self.run(&scenario)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Goal;
    use crate::error::ProjectionError;
    use crate::events::{CashFlowEvent, Frequency};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_case(id: &str, initial: f64) -> ClientCase {
        let mut case = ClientCase::new(initial, 0.04);
        case.client_id = Some(id.to_string());
        case.horizon_end_year = Some(2040);
        case.events.push(CashFlowEvent::new(500.0, Frequency::Monthly, date(2024, 1, 1)));
        case.goals.push(Goal::new("Retire", 400_000.0, date(2040, 1, 1)));
        case
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::new(ProjectionConfig::new(2024));
        let cases: Vec<_> = (0..16)
            .map(|i| test_case(&format!("c{i}"), 10_000.0 * i as f64))
            .collect();

        let batch = runner.run_batch(&cases);
        assert_eq!(batch.len(), cases.len());
        for (case, outcome) in cases.iter().zip(&batch) {
            assert_eq!(outcome.client_id, case.client_id);
            assert_eq!(outcome.projection.points, runner.run(case).projection.points);
        }
    }

    #[test]
    fn test_checked_batch_keeps_errors() {
        let runner = ScenarioRunner::new(ProjectionConfig::new(2024));
        let mut bad = test_case("bad", 1_000.0);
        bad.annual_rate = 2.0;
        let cases = vec![test_case("ok", 1_000.0), bad];

        let outcomes = runner.run_batch_checked(&cases);
        assert!(outcomes[0].is_ok());
        assert!(matches!(outcomes[1], Err(ProjectionError::Validation { .. })));
    }

    #[test]
    fn test_checked_batch_rejects_runaway_horizon() {
        let runner = ScenarioRunner::new(ProjectionConfig::new(2024));
        let mut far = test_case("far", 1_000.0);
        far.horizon_end_year = Some(2_000_000_000);

        let outcomes = runner.run_batch_checked(&[far]);
        match &outcomes[0] {
            Err(ProjectionError::Validation { field, .. }) => assert_eq!(field, "endYear"),
            other => panic!("expected endYear rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_rate_sweep() {
        let runner = ScenarioRunner::new(ProjectionConfig::new(2024));
        let case = test_case("sweep", 100_000.0);

        let results = runner.run_rate_sweep(&case, &[0.03, 0.04, 0.05]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[1].annual_rate, 0.04);

        // Higher growth rate should result in higher final wealth
        assert!(results[2].summary.final_value > results[0].summary.final_value);
        assert!(results[2].alignment_score >= results[0].alignment_score);
    }
}
