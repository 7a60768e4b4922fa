//! Rate settings shared by planning and projection
//!
//! One place for the interest rate and projection cap, loadable from JSON.
//! Missing fields fall back to the library defaults.

use crate::error::GoalError;
use crate::planner::ContributionPlanner;
use crate::projection::{ProjectionConfig, ProjectionEngine, MAX_PROJECTION_MONTHS};
use crate::DEFAULT_ANNUAL_INTEREST_RATE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings applied when a goal does not carry its own rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSettings {
    /// Annual interest rate as a decimal (0.04 = 4%)
    #[serde(default = "default_rate")]
    pub annual_interest_rate: f64,

    /// Projection cap in months (default: 600, i.e. 50 years)
    #[serde(default = "default_max_months")]
    pub max_projection_months: u32,
}

fn default_rate() -> f64 { DEFAULT_ANNUAL_INTEREST_RATE }
fn default_max_months() -> u32 { MAX_PROJECTION_MONTHS }

impl Default for RateSettings {
    fn default() -> Self {
        Self {
            annual_interest_rate: DEFAULT_ANNUAL_INTEREST_RATE,
            max_projection_months: MAX_PROJECTION_MONTHS,
        }
    }
}

impl RateSettings {
    pub fn from_json_str(json: &str) -> Result<Self, GoalError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, GoalError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Same settings with a different annual rate
    pub fn with_rate(self, annual_interest_rate: f64) -> Self {
        Self { annual_interest_rate, ..self }
    }

    pub fn planner(&self) -> ContributionPlanner {
        ContributionPlanner::new(self.annual_interest_rate)
    }

    pub fn engine(&self) -> ProjectionEngine {
        self.engine_at(self.annual_interest_rate)
    }

    /// Projection engine with these limits but a goal-specific rate
    pub fn engine_at(&self, annual_interest_rate: f64) -> ProjectionEngine {
        ProjectionEngine::new(ProjectionConfig {
            annual_interest_rate,
            max_months: self.max_projection_months,
        })
    }
}
