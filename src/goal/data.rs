use crate::planner::{ContributionPlan, ContributionPlanner};
use crate::projection::{predict_goal_completion, ProjectionOutcome};
use crate::DEFAULT_ANNUAL_INTEREST_RATE;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A savings goal
///
/// `target_amount >= current_amount` is expected but not enforced; an
/// over-funded goal plans a negative contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingGoal {
    pub name: String,

    /// Amount to reach
    pub target_amount: f64,

    /// Savings already set aside
    pub current_amount: f64,

    /// Months left to reach the target
    pub timeline_months: u32,

    /// Goal-specific annual rate; `None` means the caller's default
    #[serde(default)]
    pub annual_interest_rate: Option<f64>,

    /// Optional target date; when set it can replace `timeline_months`
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl FundingGoal {
    pub fn new(name: impl Into<String>, target_amount: f64, current_amount: f64, timeline_months: u32) -> Self {
        Self {
            name: name.into(),
            target_amount,
            current_amount,
            timeline_months,
            annual_interest_rate: None,
            deadline: None,
        }
    }

    pub fn with_rate(mut self, annual_interest_rate: f64) -> Self {
        self.annual_interest_rate = Some(annual_interest_rate);
        self
    }

    /// Recompute `timeline_months` from the deadline as of a given date
    ///
    /// Goals without a deadline are returned unchanged.
    pub fn with_deadline(mut self, as_of: NaiveDate) -> Self {
        if let Some(deadline) = self.deadline {
            self.timeline_months = months_until(deadline, as_of);
        }
        self
    }

    /// Goal rate, or `fallback` when the goal has none
    pub fn rate_or(&self, fallback: f64) -> f64 {
        self.annual_interest_rate.unwrap_or(fallback)
    }

    pub fn remaining(&self) -> f64 {
        self.target_amount - self.current_amount
    }

    /// Fraction of the target already saved (unclamped)
    pub fn progress(&self) -> f64 {
        self.current_amount / self.target_amount
    }

    /// Contribution plan at the goal's rate (4% when unset)
    pub fn plan(&self) -> ContributionPlan {
        ContributionPlanner::new(self.rate_or(DEFAULT_ANNUAL_INTEREST_RATE))
            .plan(self.target_amount, self.current_amount, self.timeline_months)
    }

    /// Completion projection for a given monthly contribution at the goal's rate
    pub fn project(&self, monthly_contribution: f64) -> ProjectionOutcome {
        predict_goal_completion(
            self.current_amount,
            monthly_contribution,
            self.rate_or(DEFAULT_ANNUAL_INTEREST_RATE),
        )
    }
}

/// Whole calendar months from `as_of` to `deadline`
///
/// A partial final month does not count. Returns 0 when the deadline is not
/// after `as_of`.
pub fn months_until(deadline: NaiveDate, as_of: NaiveDate) -> u32 {
    if deadline <= as_of {
        return 0;
    }

    let mut months = (deadline.year() - as_of.year()) * 12
        + deadline.month() as i32
        - as_of.month() as i32;
    if deadline.day() < as_of.day() {
        months -= 1;
    }

    months.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_months_until() {
        assert_eq!(months_until(date(2027, 10, 19), date(2026, 10, 19)), 12);
        assert_eq!(months_until(date(2027, 10, 18), date(2026, 10, 19)), 11);
        assert_eq!(months_until(date(2026, 11, 1), date(2026, 10, 19)), 0);
        assert_eq!(months_until(date(2029, 6, 30), date(2026, 6, 30)), 36);
        // Deadline in the past
        assert_eq!(months_until(date(2025, 1, 1), date(2026, 10, 19)), 0);
        assert_eq!(months_until(date(2026, 10, 19), date(2026, 10, 19)), 0);
    }

    #[test]
    fn test_with_deadline() {
        let mut goal = FundingGoal::new("House", 800_000.0, 320_000.0, 1);
        goal.deadline = Some(date(2029, 6, 30));
        let goal = goal.with_deadline(date(2026, 10, 19));
        assert_eq!(goal.timeline_months, 32);

        let no_deadline = FundingGoal::new("Car", 10.0, 5.0, 7).with_deadline(date(2026, 10, 19));
        assert_eq!(no_deadline.timeline_months, 7);
    }

    #[test]
    fn test_progress_and_remaining() {
        let goal = FundingGoal::new("Emergency Fund", 150_000.0, 125_000.0, 12);
        assert_eq!(goal.remaining(), 25_000.0);
        assert!((goal.progress() - 0.8333).abs() < 0.0001);

        let over = FundingGoal::new("Over", 100.0, 150.0, 12);
        assert_eq!(over.progress(), 1.5);
        assert_eq!(over.remaining(), -50.0);
    }

    #[test]
    fn test_plan_uses_goal_rate() {
        let goal = FundingGoal::new("Emergency Fund", 150_000.0, 125_000.0, 12);
        assert!((goal.plan().monthly_contribution - 2128.7476).abs() < 0.001);

        let flat = goal.clone().with_rate(0.0);
        assert_eq!(flat.plan().monthly_contribution, 25_000.0 / 12.0);
        assert_eq!(flat.rate_or(0.04), 0.0);
    }

    #[test]
    fn test_project() {
        let goal = FundingGoal::new("Starter", 2_000.0, 1_000.0, 12);
        assert_eq!(goal.project(100.0), predict_goal_completion(1_000.0, 100.0, 0.04));
    }
}
