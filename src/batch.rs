//! Plan and project many goals at once
//!
//! Each goal is planned at its own rate (or the settings rate), then projected
//! forward with the planned contribution. Goals are independent, so the batch
//! runs in parallel.

use crate::config::RateSettings;
use crate::error::GoalError;
use crate::goal::FundingGoal;
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One row of the batch report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalReport {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub timeline_months: u32,
    pub annual_interest_rate: f64,
    pub monthly_contribution: f64,
    pub progress: f64,
    pub projection_months: u32,
    pub projection_final_amount: f64,
    pub projection_capped: bool,
}

impl GoalReport {
    pub fn build(goal: &FundingGoal, settings: &RateSettings) -> Self {
        let rate = goal.rate_or(settings.annual_interest_rate);
        let plan = settings
            .with_rate(rate)
            .planner()
            .plan(goal.target_amount, goal.current_amount, goal.timeline_months);
        let outcome = settings
            .engine_at(rate)
            .project(goal.current_amount, plan.monthly_contribution);

        if outcome.is_capped() {
            warn!(
                "Projection for '{}' hit the {}-month cap at {:.2}",
                goal.name,
                outcome.months(),
                outcome.final_amount()
            );
        }

        Self {
            name: goal.name.clone(),
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            timeline_months: goal.timeline_months,
            annual_interest_rate: rate,
            monthly_contribution: plan.monthly_contribution,
            progress: goal.progress(),
            projection_months: outcome.months(),
            projection_final_amount: outcome.final_amount(),
            projection_capped: outcome.is_capped(),
        }
    }
}

/// Plan every goal; output order matches input order
pub fn plan_goals(goals: &[FundingGoal], settings: &RateSettings) -> Vec<GoalReport> {
    info!("Planning {} goals at default rate {:.4}", goals.len(), settings.annual_interest_rate);
    goals
        .par_iter()
        .map(|goal| GoalReport::build(goal, settings))
        .collect()
}

/// Totals across a batch
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BatchSummary {
    pub goals: usize,
    /// Sum of planned contributions for goals that still need funding
    pub total_monthly_contribution: f64,
    /// Sum of positive funding gaps
    pub total_remaining: f64,
    pub capped_projections: usize,
}

pub fn summarize(reports: &[GoalReport]) -> BatchSummary {
    let mut summary = BatchSummary { goals: reports.len(), ..Default::default() };
    for report in reports {
        let remaining = report.target_amount - report.current_amount;
        if remaining > 0.0 {
            summary.total_remaining += remaining;
            summary.total_monthly_contribution += report.monthly_contribution;
        }
        if report.projection_capped {
            summary.capped_projections += 1;
        }
    }
    summary
}

/// Write reports as CSV to any writer
pub fn write_report_to<W: Write>(writer: W, reports: &[GoalReport]) -> Result<(), GoalError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for report in reports {
        wtr.serialize(report)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write reports to a CSV file
pub fn write_report<P: AsRef<Path>>(path: P, reports: &[GoalReport]) -> Result<(), GoalError> {
    let path = path.as_ref();
    write_report_to(File::create(path)?, reports)?;
    info!("Report written to {}", path.display());
    Ok(())
}
