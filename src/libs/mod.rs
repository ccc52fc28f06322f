//! Core library modules for todolist.
//!
//! - **Domain**: dates, priorities, tasks and the ordered task store
//! - **Persistence**: the six-line record format and the data directory
//! - **Presentation**: listings, tables and user-facing messages
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::libs::{date::Date, priority::Priority, store::TaskStore, task::{Task, TaskKind}};
//!
//! let mut store = TaskStore::new("tasks.txt");
//! store.load()?;
//! store.add(Task::new(TaskKind::Plain, "Buy milk", "", Priority::Medium, Date::new(1, 1, 2030)))?;
//! store.save()?;
//! # Ok::<(), todolist::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod date;
pub mod error;
pub mod messages;
pub mod priority;
pub mod record;
pub mod store;
pub mod task;
pub mod view;
