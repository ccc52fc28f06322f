//! Display implementation for todolist messages.
//!
//! Every user-facing sentence lives in the match below, so wording stays
//! consistent between the interactive menu and the one-shot commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(number) => format!("Task #{} added successfully.", number),
            Message::TaskMarkedDone(number) => format!("Task #{} marked as done.", number),
            Message::TaskRemoved(number, title) => format!("Task #{} '{}' removed.", number, title),
            Message::DeletionCancelled => "Deletion cancelled.".to_string(),
            Message::CreationDateToday(date) => format!("Creation date set to today: {}", date),
            Message::NewTaskHeader => "--- New Task ---".to_string(),
            Message::SortedByPriority => "Tasks sorted by priority (High to Low).".to_string(),
            Message::SortedByDeadline => "Tasks sorted by deadline (earliest first).".to_string(),
            Message::TaskCommandFailed(error) => format!("Error: {}", error),

            // === PERSISTENCE MESSAGES ===
            Message::TasksLoaded(count, path) => format!("Loaded {} task(s) from {}", count, path),
            Message::LoadFailed(path, error) => format!("Could not read tasks from {} ({}), starting with an empty list. The file will not be overwritten.", path, error),
            Message::SaveFailed(path, error) => format!("Could not save tasks to {}: {}", path, error),
            Message::Goodbye => "Goodbye! Your tasks have been saved.".to_string(),

            // === MENU ===
            Message::MenuTitle => "TODO LIST MANAGER".to_string(),
            Message::MenuAdd => "1. Add new task".to_string(),
            Message::MenuListAll => "2. Show all tasks".to_string(),
            Message::MenuListCompleted => "3. Show completed tasks".to_string(),
            Message::MenuListPending => "4. Show pending tasks".to_string(),
            Message::MenuListOverdue => "5. Show overdue tasks".to_string(),
            Message::MenuMarkDone => "6. Mark task as done".to_string(),
            Message::MenuDelete => "7. Delete a task".to_string(),
            Message::MenuSortPriority => "8. Sort by priority".to_string(),
            Message::MenuSortDeadline => "9. Sort by deadline".to_string(),
            Message::MenuExit => "0. Exit".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigDeleted => "Configuration removed, the default task file will be used.".to_string(),
            Message::DataFileInUse(path) => format!("Tasks are kept in {}", path),

            // === PROMPTS ===
            Message::PromptMenuChoice => "Your choice".to_string(),
            Message::PromptTitle => "Title".to_string(),
            Message::PromptDescription => "Description".to_string(),
            Message::PromptPriority => "Priority (1=Low, 2=Medium, 3=High)".to_string(),
            Message::PromptDeadline => "Deadline (day month year, e.g. 15 8 2025)".to_string(),
            Message::PromptTaskKind => "Task type".to_string(),
            Message::PromptTaskKindNormal => "Normal".to_string(),
            Message::PromptTaskKindSpecial => "Special deadline task".to_string(),
            Message::PromptNumberToMarkDone => "Enter task number to mark as done".to_string(),
            Message::PromptNumberToDelete => "Enter task number to delete".to_string(),
            Message::PromptConfirmDelete(title) => format!("Delete '{}'? Are you sure?", title),
            Message::PromptDataFile => "Path of the task file".to_string(),

            // === VALIDATION ===
            Message::NumberOutOfRange(min, max) => format!("Invalid input. Please enter a number between {} and {}.", min, max),
            Message::NumberTooSmall(min) => format!("Invalid input. Please enter a number of at least {}.", min),
        };

        write!(f, "{}", text)
    }
}
