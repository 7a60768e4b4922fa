//! Error types for loading goals, settings and writing reports
//!
//! The numeric core never fails; only file and parsing surfaces return these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GoalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Settings error: {0}")]
    Json(#[from] serde_json::Error),

    /// A goal row parsed but cannot describe a goal (e.g. blank name)
    #[error("Invalid goal on line {line}: {reason}")]
    InvalidGoal { line: u64, reason: String },
}
