//! Projection outcome types

use serde::{Deserialize, Serialize};

/// How a projection terminated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProjectionOutcome {
    /// Balance reached the completion threshold after `months` periods
    Converged { months: u32, final_amount: f64 },
    /// Period cap reached first; `months` is the cap that was applied
    CappedAtMaxPeriods { months: u32, final_amount: f64 },
}

impl ProjectionOutcome {
    pub fn months(&self) -> u32 {
        match *self {
            ProjectionOutcome::Converged { months, .. } => months,
            ProjectionOutcome::CappedAtMaxPeriods { months, .. } => months,
        }
    }

    pub fn final_amount(&self) -> f64 {
        match *self {
            ProjectionOutcome::Converged { final_amount, .. } => final_amount,
            ProjectionOutcome::CappedAtMaxPeriods { final_amount, .. } => final_amount,
        }
    }

    pub fn is_capped(&self) -> bool {
        matches!(self, ProjectionOutcome::CappedAtMaxPeriods { .. })
    }

    /// Flatten to the plain `{ months, final_amount }` record
    pub fn result(&self) -> ProjectionResult {
        ProjectionResult {
            months: self.months(),
            final_amount: self.final_amount(),
        }
    }
}

/// Periods elapsed and balance at termination, regardless of how it ended
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub months: u32,
    pub final_amount: f64,
}

impl From<ProjectionOutcome> for ProjectionResult {
    fn from(outcome: ProjectionOutcome) -> Self {
        outcome.result()
    }
}
