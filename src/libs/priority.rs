//! Task priority: Low, Medium or High, stored as its rank 1 to 3.

use super::error::{Result, TaskError};
use std::fmt;
use std::str::FromStr;

/// Task importance. Ordered by rank, so `High` compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    #[default]
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Priority {
    /// Builds a priority from its rank, clamping anything outside 1..=3 to `Low`.
    pub fn new(rank: i64) -> Self {
        Self::try_new(rank).unwrap_or_default()
    }

    pub fn try_new(rank: i64) -> Result<Self> {
        match rank {
            1 => Ok(Priority::Low),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            other => Err(TaskError::InvalidPriority(other)),
        }
    }

    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    /// The bare rank, as stored in the data file. Use [`Priority::name`] for people.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        let rank = s
            .trim()
            .parse::<i64>()
            .map_err(|_| TaskError::MalformedPriority(s.trim().to_string()))?;
        Ok(Priority::new(rank))
    }
}
