//! Wealth Projection CLI
//!
//! Command-line interface for running client projections

use anyhow::{bail, Context};
use chrono::Datelike;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use wealth_projection::client::{load_case, load_cases};
use wealth_projection::events::load_events;
use wealth_projection::simulation::SimulationOutcome;
use wealth_projection::validation::validate_case;
use wealth_projection::{AlignmentOverview, MonthlyBoundary, ProjectionConfig, ScenarioRunner};

#[derive(Parser)]
#[command(name = "wealth_projection", version, about = "Deterministic wealth projections for client cases")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project a single client case
    Project {
        /// JSON case file
        case: PathBuf,

        /// Replace the case's events with rows from this CSV
        #[arg(long)]
        events: Option<PathBuf>,

        #[command(flatten)]
        run: RunArgs,

        /// Override the case's last projected year
        #[arg(long)]
        end_year: Option<i32>,

        /// Write year-end points (or monthly rows with --detailed) to CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the full outcome as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Keep per-month rows
        #[arg(long)]
        detailed: bool,
    },

    /// Project a JSON array of client cases in parallel
    Batch {
        cases: PathBuf,

        #[command(flatten)]
        run: RunArgs,

        /// Write outcomes as JSON (default: stdout summary only)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Project one case at several annual rates
    Sweep {
        case: PathBuf,

        /// Comma-separated annual rates, e.g. 0.02,0.04,0.06
        #[arg(long, value_delimiter = ',', required = true)]
        rates: Vec<f64>,

        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(clap::Args)]
struct RunArgs {
    /// First projected year (default: current calendar year)
    #[arg(long)]
    as_of_year: Option<i32>,

    /// Month handling for MONTHLY events in their end year
    #[arg(long, value_enum, default_value_t = BoundaryArg::Month)]
    boundary: BoundaryArg,

    /// Skip input validation
    #[arg(long)]
    no_validate: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum BoundaryArg {
    Year,
    Month,
}

impl RunArgs {
    fn config(&self, detailed_output: bool) -> ProjectionConfig {
        let as_of_year = self
            .as_of_year
            .unwrap_or_else(|| chrono::Local::now().year());
        ProjectionConfig {
            as_of_year,
            monthly_boundary: match self.boundary {
                BoundaryArg::Year => MonthlyBoundary::YearGranular,
                BoundaryArg::Month => MonthlyBoundary::MonthGranular,
            },
            detailed_output,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Project { case, events, run, end_year, csv, json, detailed } => {
            let mut case = load_case(&case)
                .with_context(|| format!("loading case {}", case.display()))?;
            if let Some(path) = events {
                case.events = load_events(&path)
                    .with_context(|| format!("loading events {}", path.display()))?;
            }
            if end_year.is_some() {
                case.horizon_end_year = end_year;
            }
            let config = run.config(detailed);
            if !run.no_validate {
                validate_case(&case, config.as_of_year)?;
            }

            let runner = ScenarioRunner::new(config);
            let outcome = runner.run(&case);

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print_outcome(&outcome);
            }
            if let Some(path) = csv {
                write_csv(&path, &outcome, detailed)
                    .with_context(|| format!("writing {}", path.display()))?;
                eprintln!("Results written to: {}", path.display());
            }
        }

        Command::Batch { cases, run, output } => {
            let cases = load_cases(&cases)
                .with_context(|| format!("loading cases {}", cases.display()))?;
            let runner = ScenarioRunner::new(run.config(false));

            let outcomes: Vec<SimulationOutcome> = if run.no_validate {
                runner.run_batch(&cases)
            } else {
                let mut accepted = Vec::with_capacity(cases.len());
                for (case, result) in cases.iter().zip(runner.run_batch_checked(&cases)) {
                    match result {
                        Ok(outcome) => accepted.push(outcome),
                        Err(err) => eprintln!("skipping {}: {err}", case.label()),
                    }
                }
                accepted
            };

            println!("{:<16} {:>16} {:>10} {:>12}", "Client", "Final value", "Score", "Suggestions");
            println!("{}", "-".repeat(57));
            for outcome in &outcomes {
                println!(
                    "{:<16} {:>16.2} {:>9.1}% {:>12}",
                    outcome.client_id.as_deref().unwrap_or("-"),
                    outcome.summary.final_value,
                    outcome.alignment_score,
                    outcome.suggestions.len(),
                );
            }
            print_overview(&AlignmentOverview::from_scores(
                outcomes.iter().map(|o| o.alignment_score),
            ));

            if let Some(path) = output {
                let file = File::create(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                serde_json::to_writer_pretty(BufWriter::new(file), &outcomes)?;
                eprintln!("Outcomes written to: {}", path.display());
            }
        }

        Command::Sweep { case, rates, run } => {
            let case = load_case(&case)
                .with_context(|| format!("loading case {}", case.display()))?;
            let config = run.config(false);
            if !run.no_validate {
                validate_case(&case, config.as_of_year)?;
                if let Some(bad) = rates.iter().find(|r| !(0.0..=1.0).contains(*r)) {
                    bail!("rate {bad} outside 0..=1");
                }
            }

            let runner = ScenarioRunner::new(config);
            println!("{:>8} {:>16} {:>16} {:>8}", "Rate", "Final value", "Growth", "Score");
            for outcome in runner.run_rate_sweep(&case, &rates) {
                println!(
                    "{:>7.2}% {:>16.2} {:>16.2} {:>7.1}%",
                    outcome.annual_rate * 100.0,
                    outcome.summary.final_value,
                    outcome.summary.total_growth,
                    outcome.alignment_score,
                );
            }
        }
    }

    Ok(())
}

fn print_outcome(outcome: &SimulationOutcome) {
    println!(
        "Projection from {} at {:.2}% ({} years):",
        outcome.as_of_year,
        outcome.annual_rate * 100.0,
        outcome.summary.years_projected
    );
    println!("{:>6} {:>18}", "Year", "Projected value");
    println!("{}", "-".repeat(25));
    for point in &outcome.projection.points {
        println!("{:>6} {:>18.2}", point.year, point.projected_value);
    }

    let summary = &outcome.summary;
    println!("\nSummary:");
    println!("  Initial wealth: {:.2}", summary.initial_wealth);
    println!("  Final value:    {:.2}", summary.final_value);
    println!("  Total growth:   {:.2}", summary.total_growth);

    println!(
        "\nAlignment: {:.1}% ({})",
        outcome.alignment_score,
        outcome.alignment_category.label()
    );
    println!("Wallet alignment: {:.1}%", outcome.wallet_alignment);

    if !outcome.suggestions.is_empty() {
        println!("\nSuggestions:");
        for s in &outcome.suggestions {
            println!("  [P{}] {:?}: {}", s.priority, s.kind, s.description);
        }
    }
}

fn print_overview(overview: &AlignmentOverview) {
    println!("\nPortfolio alignment ({} clients):", overview.clients);
    for (category, count) in &overview.distribution {
        println!("  {:<20} {:<14} {:>5}", category.label(), category.color(), count);
    }
    println!("  Average alignment: {:.1}%", overview.average_score);
}

fn write_csv(path: &Path, outcome: &SimulationOutcome, detailed: bool) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    if detailed {
        for row in &outcome.projection.months {
            writer.serialize(row)?;
        }
    } else {
        for point in &outcome.projection.points {
            writer.serialize(point)?;
        }
    }
    writer.flush()?;
    Ok(())
}
