//! Savings goal records and goal loading

mod data;
pub mod loader;

pub use data::{FundingGoal, months_until};
pub use loader::{load_goals, load_goals_from_reader, load_sample_goals};
