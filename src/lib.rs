//! # Todolist - a personal task tracker
//!
//! Keeps an ordered list of tasks with a title, description, priority,
//! creation date and deadline. Tasks are either plain or deadline-flagged,
//! and the whole list is stored as a plain text file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
