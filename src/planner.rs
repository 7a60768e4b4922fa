//! Contribution planning for savings goals
//!
//! Sizes the level monthly contribution that closes the gap between current
//! savings and a target over a fixed number of months, using the
//! present-value-of-annuity payment formula.

use crate::{monthly_rate, DEFAULT_ANNUAL_INTEREST_RATE};
use log::warn;
use serde::{Deserialize, Serialize};

/// Level monthly contribution required to reach `target_amount` in `timeline_months`
///
/// `remaining * r / (1 - (1 + r)^-n)` with `r = annual_rate / 12`; when `r == 0`
/// the gap is split evenly, `remaining / n`.
///
/// The result is not rounded and not clamped: an over-funded goal yields a
/// negative contribution, and a zero timeline yields `inf` or `NaN`.
/// Callers without a rate of their own should pass [`DEFAULT_ANNUAL_INTEREST_RATE`].
pub fn calculate_optimal_contribution(
    target_amount: f64,
    current_amount: f64,
    timeline_months: u32,
    annual_rate: f64,
) -> f64 {
    let remaining = target_amount - current_amount;
    let rate = monthly_rate(annual_rate);
    let periods = timeline_months as f64;

    if rate == 0.0 {
        return remaining / periods;
    }

    remaining * rate / (1.0 - (1.0 + rate).powf(-periods))
}

/// Output of a contribution plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionPlan {
    /// Required contribution per month (unrounded)
    pub monthly_contribution: f64,
    /// Funding gap: target - current
    pub remaining: f64,
    /// Monthly rate the plan was sized with
    pub monthly_rate: f64,
    /// Number of contributions
    pub timeline_months: u32,
}

impl ContributionPlan {
    /// Sum of all contributions over the timeline
    pub fn total_contributed(&self) -> f64 {
        self.monthly_contribution * self.timeline_months as f64
    }

    /// True when the goal is already met and no contribution is needed
    pub fn is_funded(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// Contribution planner with a fixed annual interest rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContributionPlanner {
    annual_interest_rate: f64,
}

impl Default for ContributionPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_ANNUAL_INTEREST_RATE)
    }
}

impl ContributionPlanner {
    pub fn new(annual_interest_rate: f64) -> Self {
        Self { annual_interest_rate }
    }

    pub fn annual_interest_rate(&self) -> f64 {
        self.annual_interest_rate
    }

    /// Required monthly contribution at this planner's rate
    pub fn monthly_contribution(&self, target_amount: f64, current_amount: f64, timeline_months: u32) -> f64 {
        calculate_optimal_contribution(target_amount, current_amount, timeline_months, self.annual_interest_rate)
    }

    /// Build a full plan for a goal
    pub fn plan(&self, target_amount: f64, current_amount: f64, timeline_months: u32) -> ContributionPlan {
        if timeline_months == 0 {
            warn!("Planning with a zero-month timeline; contribution is not finite");
        }

        ContributionPlan {
            monthly_contribution: self.monthly_contribution(target_amount, current_amount, timeline_months),
            remaining: target_amount - current_amount,
            monthly_rate: monthly_rate(self.annual_interest_rate),
            timeline_months,
        }
    }
}
