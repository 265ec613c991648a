use derive_more::{AsRef, Display};

/// Free-text description of what the user wants to achieve.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct Goal(String);

impl Goal {
    pub fn new(goal: &str) -> Result<Self, GoalError> {
        let trimmed_goal = goal.trim();

        if trimmed_goal.is_empty() {
            return Err(GoalError::Empty);
        }

        Ok(Goal(trimmed_goal.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalError {
    #[error("Please describe your fitness goals")]
    Empty,
}
