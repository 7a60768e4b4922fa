//! Completion projections for savings balances

mod engine;
mod outcome;

pub use engine::{ProjectionEngine, ProjectionConfig, BalanceRow, Trajectory};
pub use outcome::{ProjectionOutcome, ProjectionResult};

use crate::DEFAULT_ANNUAL_INTEREST_RATE;

// ============================================================================
// Projection Limits
// ============================================================================
// A projection always terminates: either the balance reaches the completion
// threshold or the period cap is hit, whichever comes first.

/// Hard cap on simulated months (50 years)
pub const MAX_PROJECTION_MONTHS: u32 = 600;

/// Completion threshold as a multiple of the starting balance
pub const COMPLETION_MULTIPLE: f64 = 2.0;

/// Estimate how many months of compounding plus contributions it takes for
/// `current_savings` to double
///
/// The completion test is "balance doubled", not "target reached": the
/// projection has no target amount. Starting from zero the threshold is met
/// before the first period, giving `Converged { months: 0, final_amount: 0.0 }`.
///
/// Callers without a rate of their own should pass [`DEFAULT_ANNUAL_INTEREST_RATE`].
pub fn predict_goal_completion(
    current_savings: f64,
    monthly_contribution: f64,
    annual_rate: f64,
) -> ProjectionOutcome {
    ProjectionEngine::new(ProjectionConfig {
        annual_interest_rate: annual_rate,
        ..ProjectionConfig::default()
    })
    .project(current_savings, monthly_contribution)
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            annual_interest_rate: DEFAULT_ANNUAL_INTEREST_RATE,
            max_months: MAX_PROJECTION_MONTHS,
        }
    }
}
