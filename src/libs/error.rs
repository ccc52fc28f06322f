//! Error type shared by the task core.
//!
//! Commands work with `anyhow::Result` and convert these with `?`; the core
//! keeps a typed enum so callers can match on index and validation failures.

use std::io;
use std::path::PathBuf;

/// Errors produced by dates, priorities, tasks and the task store.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// A 0-based index outside `[0, len)`.
    #[error("Invalid task number. The list has {len} task(s).")]
    OutOfRange { index: usize, len: usize },

    /// Integer components that do not form a calendar date.
    #[error("Invalid date {day}/{month}/{year}")]
    InvalidDate { day: i64, month: i64, year: i64 },

    /// Text that is not three integers.
    #[error("Malformed date '{0}', expected 'day month year'")]
    MalformedDate(String),

    /// A rank outside 1..=3.
    #[error("Invalid priority {0}, expected 1 (Low), 2 (Medium) or 3 (High)")]
    InvalidPriority(i64),

    /// Text that is not a single integer.
    #[error("Malformed priority '{0}'")]
    MalformedPriority(String),

    /// Title or description spanning several lines.
    #[error("The {field} must fit on a single line")]
    MultilineText { field: &'static str },

    /// Saving over a data file whose earlier load failed.
    #[error("{} could not be read, refusing to overwrite it", .0.display())]
    UnreadFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = TaskError::OutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Invalid task number. The list has 2 task(s).");
    }

    #[test]
    fn test_io_error_converts() {
        let err: TaskError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, TaskError::Io(_)));
    }
}
