//! Plan contributions and project completion for a set of savings goals
//!
//! Reads goals from CSV (or the bundled samples) and writes one report row per goal

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use goal_funding::batch::{plan_goals, summarize, write_report};
use goal_funding::goal::{load_goals, load_sample_goals};
use goal_funding::RateSettings;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "plan_goals")]
#[command(about = "Size monthly contributions for savings goals and project their completion")]
struct Args {
    /// Goals CSV (default: bundled sample goals)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report CSV to write
    #[arg(short, long, default_value = "goal_report.csv")]
    output: PathBuf,

    /// JSON rate settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Annual interest rate for goals without their own (overrides config)
    #[arg(short, long)]
    rate: Option<f64>,

    /// Recompute timelines from goal deadlines as of this date (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let mut settings = match &args.config {
        Some(path) => RateSettings::from_json_file(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?,
        None => RateSettings::default(),
    };
    if let Some(rate) = args.rate {
        settings = settings.with_rate(rate);
    }

    let mut goals = match &args.input {
        Some(path) => load_goals(path)
            .with_context(|| format!("Failed to load goals from {}", path.display()))?,
        None => load_sample_goals().context("Failed to load sample goals")?,
    };
    if let Some(as_of) = args.as_of {
        goals = goals.into_iter().map(|g| g.with_deadline(as_of)).collect();
    }
    println!("Loaded {} goals", goals.len());

    let reports = plan_goals(&goals, &settings);

    println!("{:<24} {:>14} {:>14} {:>7} {:>14} {:>8} {:>8}",
             "Goal", "Target", "Saved", "Months", "Monthly", "Doubles", "Capped");
    for r in &reports {
        println!("{:<24} {:>14.2} {:>14.2} {:>7} {:>14.2} {:>8} {:>8}",
                 r.name,
                 r.target_amount,
                 r.current_amount,
                 r.timeline_months,
                 r.monthly_contribution,
                 r.projection_months,
                 if r.projection_capped { "Yes" } else { "No" });
    }

    write_report(&args.output, &reports)
        .with_context(|| format!("Failed to write report to {}", args.output.display()))?;
    println!("Output written to {}", args.output.display());

    let summary = summarize(&reports);
    println!("\nSummary:");
    println!("  Goals:                {}", summary.goals);
    println!("  Remaining to fund:    {:.2}", summary.total_remaining);
    println!("  Monthly contribution: {:.2}", summary.total_monthly_contribution);
    println!("  Capped projections:   {}", summary.capped_projections);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
