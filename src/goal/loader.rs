//! CSV loading for savings goals
//!
//! Expected headers: `name,target_amount,current_amount,timeline_months`,
//! optionally followed by `annual_interest_rate` and `deadline` (YYYY-MM-DD).
//! Blank optional cells mean "not set".

use super::FundingGoal;
use crate::error::GoalError;
use csv::{ReaderBuilder, Trim};
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Savings goals bundled with the crate, mirroring the dashboard's demo goals
const SAMPLE_GOALS_CSV: &str = include_str!("../../data/sample_goals.csv");

/// Load goals from a CSV file
pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<Vec<FundingGoal>, GoalError> {
    let path = path.as_ref();
    let goals = load_goals_from_reader(File::open(path)?)?;
    info!("Loaded {} goals from {}", goals.len(), path.display());
    Ok(goals)
}

/// Load goals from any CSV reader
pub fn load_goals_from_reader<R: Read>(reader: R) -> Result<Vec<FundingGoal>, GoalError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut goals = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let goal: FundingGoal = record.deserialize(Some(&headers))?;

        if goal.name.is_empty() {
            return Err(GoalError::InvalidGoal {
                line,
                reason: "goal name is blank".to_string(),
            });
        }

        goals.push(goal);
    }

    Ok(goals)
}

/// Load the bundled sample goals
pub fn load_sample_goals() -> Result<Vec<FundingGoal>, GoalError> {
    load_goals_from_reader(SAMPLE_GOALS_CSV.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_sample_goals() {
        let goals = load_sample_goals().expect("Failed to load");
        assert_eq!(goals.len(), 6);

        let emergency = &goals[0];
        assert_eq!(emergency.name, "Emergency Fund");
        assert_eq!(emergency.target_amount, 150_000.0);
        assert_eq!(emergency.current_amount, 125_000.0);
        assert_eq!(emergency.timeline_months, 12);
        assert_eq!(emergency.annual_interest_rate, Some(0.04));
        assert_eq!(emergency.deadline, None);

        let house = &goals[1];
        assert_eq!(house.deadline, NaiveDate::from_ymd_opt(2029, 6, 30));

        // Blank rate cell
        let vacation = goals.iter().find(|g| g.name == "Japan Vacation").unwrap();
        assert_eq!(vacation.annual_interest_rate, None);
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let csv = "name,target_amount,current_amount,timeline_months\nBike,30000,5000,10\n";
        let goals = load_goals_from_reader(csv.as_bytes()).expect("Failed to load");
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].annual_interest_rate, None);
        assert_eq!(goals[0].deadline, None);
    }

    #[test]
    fn test_edge_values_are_accepted() {
        // Zero timeline and over-funded goals load as-is
        let csv = "name,target_amount,current_amount,timeline_months\nDone,100,150,0\n";
        let goals = load_goals_from_reader(csv.as_bytes()).expect("Failed to load");
        assert_eq!(goals[0].timeline_months, 0);
        assert_eq!(goals[0].remaining(), -50.0);
    }

    #[test]
    fn test_non_numeric_amount() {
        let csv = "name,target_amount,current_amount,timeline_months\nBike,lots,5000,10\n";
        let err = load_goals_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, GoalError::Csv(_)));
    }

    #[test]
    fn test_blank_name() {
        let csv = "name,target_amount,current_amount,timeline_months\nBike,1,0,1\n ,30000,5000,10\n";
        match load_goals_from_reader(csv.as_bytes()) {
            Err(GoalError::InvalidGoal { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected InvalidGoal, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(load_goals("no/such/goals.csv"), Err(GoalError::Io(_))));
    }
}
