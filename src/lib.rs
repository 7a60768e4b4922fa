//! Goal Funding - contribution sizing and completion projections for savings goals
//!
//! This library provides:
//! - Level monthly contribution needed to reach a target by a deadline (annuity payment)
//! - Forward compounding simulation estimating when a balance completes
//! - Savings goal records, CSV loading and bundled sample goals
//! - Parallel batch planning with CSV reporting

pub mod config;
pub mod error;
pub mod goal;
pub mod planner;
pub mod projection;
pub mod batch;

// Re-export commonly used types
pub use config::RateSettings;
pub use error::GoalError;
pub use goal::FundingGoal;
pub use planner::{calculate_optimal_contribution, ContributionPlan, ContributionPlanner};
pub use projection::{
    predict_goal_completion, ProjectionEngine, ProjectionOutcome, ProjectionResult,
};
pub use batch::{plan_goals, GoalReport};

/// Default annual interest rate applied to savings goals (4%)
///
/// Shared by planning and projection so the two never drift apart.
pub const DEFAULT_ANNUAL_INTEREST_RATE: f64 = 0.04;

/// Compounding periods per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Convert an annual rate to the monthly compounding rate
pub fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / MONTHS_PER_YEAR
}
