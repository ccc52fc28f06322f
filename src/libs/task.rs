//! Tasks and their two kinds.
//!
//! A [`Task`] only changes through [`Task::mark_done`]; everything else is
//! fixed when it is built. Titles and descriptions must fit on one line so
//! the record format stays six lines per task.

use super::date::Date;
use super::error::{Result, TaskError};
use super::priority::Priority;
use std::fmt;

/// Which flavour of task a record is.
///
/// Both kinds carry the same fields. `Deadline` tasks get a banner when
/// displayed and a different tag in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskKind {
    #[default]
    Plain,
    Deadline,
}

impl TaskKind {
    /// Tag written as the first line of a record.
    pub fn tag(&self) -> u8 {
        match self {
            TaskKind::Plain => 0,
            TaskKind::Deadline => 1,
        }
    }

    /// `0` is a plain task, every other tag a deadline task.
    pub fn from_tag(tag: i64) -> Self {
        if tag == 0 {
            TaskKind::Plain
        } else {
            TaskKind::Deadline
        }
    }

    /// Line printed above the shared rendering, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            TaskKind::Plain => None,
            TaskKind::Deadline => Some("[Deadline Task - Special]"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Plain => "Normal",
            TaskKind::Deadline => "Deadline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    kind: TaskKind,
    title: String,
    description: String,
    done: bool,
    priority: Priority,
    created: Date,
    deadline: Date,
}

impl Task {
    /// A pending task created today.
    pub fn new(kind: TaskKind, title: &str, description: &str, priority: Priority, deadline: Date) -> Self {
        Task::from_parts(kind, title, description, priority, Date::today(), deadline, false)
    }

    /// Rebuilds a task from every stored field, e.g. when reading the data file.
    pub fn from_parts(
        kind: TaskKind,
        title: &str,
        description: &str,
        priority: Priority,
        created: Date,
        deadline: Date,
        done: bool,
    ) -> Self {
        Task {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            done,
            priority,
            created,
            deadline,
        }
    }

    /// Completion is one-way; calling this on a done task changes nothing.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn created(&self) -> Date {
        self.created
    }

    pub fn deadline(&self) -> Date {
        self.deadline
    }

    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(Date::today())
    }

    /// A finished task is never overdue, whatever its deadline.
    pub fn is_overdue_on(&self, today: Date) -> bool {
        !self.done && self.deadline < today
    }

    pub fn status_name(&self) -> &'static str {
        if self.done {
            "Done"
        } else {
            "Pending"
        }
    }

    /// Checks that title and description can be stored one per line.
    pub fn validate(&self) -> Result<()> {
        validate_single_line("title", &self.title)?;
        validate_single_line("description", &self.description)
    }
}

/// Rejects text that would break the line-per-field data file.
pub fn validate_single_line(field: &'static str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(TaskError::MultilineText { field });
    }
    Ok(())
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(banner) = self.kind.banner() {
            writeln!(f, "{}", banner)?;
        }
        writeln!(f, "Title       : {}", self.title)?;
        writeln!(f, "Description : {}", self.description)?;
        writeln!(f, "Priority    : {}", self.priority.name())?;
        writeln!(f, "Status      : {}", self.status_name())?;
        writeln!(f, "Created     : {}", self.created)?;
        writeln!(f, "Deadline    : {}", self.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(kind: TaskKind, deadline: Date) -> Task {
        Task::from_parts(kind, "Write report", "Quarterly numbers", Priority::High, Date::new(1, 3, 2025), deadline, false)
    }

    #[test]
    fn test_mark_done_is_idempotent() {
        let mut t = task(TaskKind::Plain, Date::new(10, 3, 2025));
        assert!(!t.is_done());
        t.mark_done();
        assert!(t.is_done());
        t.mark_done();
        assert!(t.is_done());
    }

    #[test]
    fn test_overdue_rules() {
        let today = Date::new(15, 6, 2025);
        let mut past = task(TaskKind::Plain, Date::new(14, 6, 2025));
        assert!(past.is_overdue_on(today));

        assert!(!task(TaskKind::Plain, today).is_overdue_on(today));
        assert!(!task(TaskKind::Plain, Date::new(16, 6, 2025)).is_overdue_on(today));

        past.mark_done();
        assert!(!past.is_overdue_on(today));
    }

    #[test]
    fn test_overdue_against_local_calendar() {
        let now = chrono::Local::now().date_naive();
        let today = Date::from(now);
        let yesterday = Date::from(now - chrono::Duration::days(1));
        assert!(task(TaskKind::Plain, yesterday).is_overdue_on(today));
        assert!(!task(TaskKind::Plain, today).is_overdue_on(today));
        assert!(!task(TaskKind::Plain, Date::new(1, 1, 9999)).is_overdue());
    }

    #[test]
    fn test_new_task_is_pending_and_created_today() {
        let t = Task::new(TaskKind::Deadline, "a", "b", Priority::Low, Date::new(1, 1, 2030));
        assert!(!t.is_done());
        assert_eq!(t.created(), Date::today());
        assert_eq!(t.kind(), TaskKind::Deadline);
    }

    #[test]
    fn test_display_plain() {
        let t = task(TaskKind::Plain, Date::new(10, 3, 2025));
        let expected = "Title       : Write report\n\
                        Description : Quarterly numbers\n\
                        Priority    : High\n\
                        Status      : Pending\n\
                        Created     : 1/3/2025\n\
                        Deadline    : 10/3/2025\n";
        assert_eq!(t.to_string(), expected);
    }

    #[test]
    fn test_display_deadline_kind_has_banner() {
        let mut t = task(TaskKind::Deadline, Date::new(10, 3, 2025));
        t.mark_done();
        let text = t.to_string();
        assert!(text.starts_with("[Deadline Task - Special]\nTitle       : Write report\n"));
        assert!(text.contains("Status      : Done\n"));
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(TaskKind::Plain.tag(), 0);
        assert_eq!(TaskKind::Deadline.tag(), 1);
        assert_eq!(TaskKind::from_tag(0), TaskKind::Plain);
        assert_eq!(TaskKind::from_tag(1), TaskKind::Deadline);
        assert_eq!(TaskKind::from_tag(7), TaskKind::Deadline);
    }

    #[test]
    fn test_validate_rejects_newlines() {
        let t = Task::from_parts(TaskKind::Plain, "two\nlines", "", Priority::Low, Date::default(), Date::default(), false);
        assert!(matches!(t.validate(), Err(TaskError::MultilineText { field: "title" })));
        assert!(validate_single_line("description", "carriage\rreturn").is_err());
        assert!(validate_single_line("description", "fine").is_ok());
    }
}
