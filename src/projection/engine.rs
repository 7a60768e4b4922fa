//! Monthly compounding engine

use super::{ProjectionOutcome, COMPLETION_MULTIPLE};
use crate::monthly_rate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Annual interest rate, compounded monthly
    pub annual_interest_rate: f64,
    /// Stop after this many months even if the balance has not completed
    pub max_months: u32,
}

/// One simulated month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceRow {
    /// Projection month (1-indexed)
    pub month: u32,
    pub bop_balance: f64,
    /// Interest credited on the beginning-of-period balance
    pub interest: f64,
    pub contribution: f64,
    pub eop_balance: f64,
}

/// Projection outcome together with every simulated month
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub outcome: ProjectionOutcome,
    pub rows: Vec<BalanceRow>,
}

/// Forward projection of a balance under a fixed monthly contribution
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project until the balance doubles or the month cap is reached
    pub fn project(&self, current_savings: f64, monthly_contribution: f64) -> ProjectionOutcome {
        self.run(current_savings, monthly_contribution, |_| {})
    }

    /// Same projection, also returning the month-by-month balances
    pub fn project_with_trajectory(&self, current_savings: f64, monthly_contribution: f64) -> Trajectory {
        let mut rows = Vec::new();
        let outcome = self.run(current_savings, monthly_contribution, |row| rows.push(row));
        Trajectory { outcome, rows }
    }

    fn run<F>(&self, current_savings: f64, monthly_contribution: f64, mut on_month: F) -> ProjectionOutcome
    where
        F: FnMut(BalanceRow),
    {
        let rate = monthly_rate(self.config.annual_interest_rate);
        let threshold = current_savings * COMPLETION_MULTIPLE;

        let mut balance = current_savings;
        let mut months = 0u32;

        while balance < threshold && months < self.config.max_months {
            let bop_balance = balance;
            balance = bop_balance * (1.0 + rate) + monthly_contribution;
            months += 1;

            on_month(BalanceRow {
                month: months,
                bop_balance,
                interest: bop_balance * rate,
                contribution: monthly_contribution,
                eop_balance: balance,
            });
        }

        // Anything that stopped the loop other than the cap counts as completion,
        // including a NaN balance that no longer compares below the threshold.
        let outcome = if balance < threshold {
            ProjectionOutcome::CappedAtMaxPeriods { months, final_amount: balance }
        } else {
            ProjectionOutcome::Converged { months, final_amount: balance }
        };

        debug!(
            "Projected {:.2} + {:.2}/month at {:.4}: {:?}",
            current_savings, monthly_contribution, self.config.annual_interest_rate, outcome
        );

        outcome
    }
}
