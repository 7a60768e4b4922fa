//! Month-by-month completion projection for a single balance

use anyhow::{ensure, Result};
use clap::Parser;
use goal_funding::projection::{ProjectionConfig, ProjectionEngine, ProjectionOutcome, MAX_PROJECTION_MONTHS};
use goal_funding::DEFAULT_ANNUAL_INTEREST_RATE;

#[derive(Parser, Debug)]
#[command(name = "project_goal")]
#[command(about = "Project how long a balance takes to double with monthly contributions")]
struct Args {
    /// Current savings
    #[arg(long)]
    current: f64,

    /// Monthly contribution
    #[arg(long)]
    contribution: f64,

    /// Annual interest rate as a decimal
    #[arg(long, default_value_t = DEFAULT_ANNUAL_INTEREST_RATE)]
    rate: f64,

    /// Projection cap in months
    #[arg(long, default_value_t = MAX_PROJECTION_MONTHS)]
    max_months: u32,

    /// Number of monthly rows to print (0 prints all)
    #[arg(long, default_value_t = 24)]
    rows: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.rate.is_finite(), "rate must be a finite number");

    let engine = ProjectionEngine::new(ProjectionConfig {
        annual_interest_rate: args.rate,
        max_months: args.max_months,
    });
    let trajectory = engine.project_with_trajectory(args.current, args.contribution);

    let shown = if args.rows == 0 { trajectory.rows.len() } else { args.rows };
    println!("{:>6} {:>16} {:>12} {:>14} {:>16}", "Month", "BOP", "Interest", "Contribution", "EOP");
    for row in trajectory.rows.iter().take(shown) {
        println!("{:>6} {:>16.2} {:>12.2} {:>14.2} {:>16.2}",
                 row.month, row.bop_balance, row.interest, row.contribution, row.eop_balance);
    }
    if trajectory.rows.len() > shown {
        println!("   ... {} more months", trajectory.rows.len() - shown);
    }

    match trajectory.outcome {
        ProjectionOutcome::Converged { months, final_amount } => {
            println!("\nBalance doubled after {} months: {:.2}", months, final_amount);
        }
        ProjectionOutcome::CappedAtMaxPeriods { months, final_amount } => {
            println!("\nNo completion within {} months; balance {:.2}", months, final_amount);
        }
    }

    Ok(())
}
