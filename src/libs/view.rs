//! Console rendering of task listings.
//!
//! [`View::render`] builds the banner layout used by the menu and `list`;
//! [`View::table`] builds the compact prettytable used by `list --table`.
//! Both return values instead of printing.

use super::task::Task;
use prettytable::{row, Table};

const RULE_WIDTH: usize = 40;

/// Which subset of the list a rendering shows. Drives the banner and the
/// "nothing here" text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    All,
    Completed,
    Pending,
    Overdue,
}

impl Listing {
    pub fn by_status(done: bool) -> Self {
        if done {
            Listing::Completed
        } else {
            Listing::Pending
        }
    }

    fn header(&self) -> &'static str {
        match self {
            Listing::All => "ALL TASKS",
            Listing::Completed => "COMPLETED TASKS",
            Listing::Pending => "PENDING TASKS",
            Listing::Overdue => "OVERDUE TASKS",
        }
    }

    pub fn empty_text(&self) -> &'static str {
        match self {
            Listing::All => "No tasks to display.",
            Listing::Completed => "No completed tasks.",
            Listing::Pending => "No pending tasks.",
            Listing::Overdue => "No overdue tasks. Good job!",
        }
    }
}

pub struct View {}

impl View {
    /// Renders numbered tasks in the banner layout.
    ///
    /// The full list gets a ruled `TASK #n` block per task; filtered lists get
    /// one header followed by `Task #n:` entries. Numbers are the positions in
    /// the whole list, so gaps show where filtered-out tasks sit.
    pub fn render<'a, I>(listing: Listing, entries: I) -> String
    where
        I: IntoIterator<Item = (usize, &'a Task)>,
    {
        let rule = "-".repeat(RULE_WIDTH);
        let mut out = String::new();

        for (number, task) in entries {
            if listing == Listing::All {
                out.push_str(&format!("\n{rule}\n  TASK #{number}\n{rule}\n"));
            } else {
                if out.is_empty() {
                    out.push_str(&format!("\n{rule}\n{}\n{rule}\n", listing.header()));
                }
                out.push_str(&format!("\nTask #{number}:\n"));
            }
            out.push_str(&task.to_string());
        }

        if out.is_empty() {
            return format!("\n{}\n", listing.empty_text());
        }
        out
    }

    /// One row per task, for the compact `--table` listing.
    pub fn table<'a, I>(entries: I) -> Table
    where
        I: IntoIterator<Item = (usize, &'a Task)>,
    {
        let mut table = Table::new();

        table.add_row(row!["#", "TYPE", "TITLE", "PRIORITY", "STATUS", "CREATED", "DEADLINE"]);
        for (number, task) in entries {
            table.add_row(row![
                number,
                task.kind().label(),
                task.title(),
                task.priority().name(),
                task.status_name(),
                task.created(),
                task.deadline()
            ]);
        }

        table
    }
}
