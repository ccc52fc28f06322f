//! The ordered task list and its data file.
//!
//! A [`TaskStore`] owns every task in a single `Vec`. A task's number is its
//! 1-based position: sorting renumbers tasks, and removing one shifts every
//! later task down by one. Methods take 0-based indices; the command layer
//! converts the numbers people type.
//!
//! Nothing here prints. Listings come back as strings and persistence
//! failures come back as [`TaskError`]s, leaving it to the caller to decide
//! what the user sees.

use super::date::Date;
use super::error::{Result, TaskError};
use super::record;
use super::task::Task;
use super::view::{Listing, View};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    load_failed: bool,
}

impl TaskStore {
    /// An empty store bound to `path`. Nothing is read until [`TaskStore::load`].
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            tasks: Vec::new(),
            load_failed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set once a load hits an I/O error. Such a store never saves.
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Appends a task and returns its 1-based number.
    pub fn add(&mut self, task: Task) -> Result<usize> {
        task.validate()?;
        self.tasks.push(task);
        Ok(self.tasks.len())
    }

    /// Every task paired with its number.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks.iter().enumerate().map(|(index, task)| (index + 1, task))
    }

    pub fn with_status(&self, done: bool) -> impl Iterator<Item = (usize, &Task)> {
        self.entries().filter(move |(_, task)| task.is_done() == done)
    }

    pub fn overdue_on(&self, today: Date) -> impl Iterator<Item = (usize, &Task)> {
        self.entries().filter(move |(_, task)| task.is_overdue_on(today))
    }

    pub fn list(&self) -> String {
        View::render(Listing::All, self.entries())
    }

    pub fn list_by_status(&self, done: bool) -> String {
        View::render(Listing::by_status(done), self.with_status(done))
    }

    pub fn list_overdue(&self) -> String {
        self.list_overdue_on(Date::today())
    }

    pub fn list_overdue_on(&self, today: Date) -> String {
        View::render(Listing::Overdue, self.overdue_on(today))
    }

    pub fn mark_done(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.tasks[index].mark_done();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// High before Low. The sort is stable, so equal priorities keep their order.
    pub fn sort_by_priority(&mut self) {
        self.tasks.sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    /// Earliest deadline first, stable.
    pub fn sort_by_deadline(&mut self) {
        self.tasks.sort_by_key(|task| task.deadline());
    }

    /// Overwrites the data file with every task in the current order.
    ///
    /// Refused with [`TaskError::UnreadFile`] after a failed load, so tasks
    /// that were never read are not replaced.
    pub fn save(&self) -> Result<()> {
        if self.load_failed {
            return Err(TaskError::UnreadFile(self.path.clone()));
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(&self.path)?);
        record::write_tasks(&mut out, &self.tasks)?;
        tracing::debug!(path = %self.path.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    /// Appends the tasks stored in the data file and returns how many were read.
    ///
    /// A missing file is an empty list, not an error.
    pub fn load(&mut self) -> Result<usize> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file yet");
                return Ok(0);
            }
            Err(err) => {
                self.load_failed = true;
                return Err(err.into());
            }
        };

        let loaded = match record::read_tasks(BufReader::new(file)) {
            Ok(loaded) => loaded,
            Err(err) => {
                self.load_failed = true;
                return Err(err);
            }
        };
        let count = loaded.len();
        self.tasks.extend(loaded);
        tracing::debug!(path = %self.path.display(), count, "loaded tasks");
        Ok(count)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(TaskError::OutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::priority::Priority;
    use crate::libs::task::TaskKind;

    fn task(title: &str, priority: Priority, deadline: Date) -> Task {
        Task::from_parts(TaskKind::Plain, title, "", priority, Date::new(1, 1, 2025), deadline, false)
    }

    fn titles(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(Task::title).collect()
    }

    fn store_with(tasks: Vec<Task>) -> TaskStore {
        let mut store = TaskStore::new("unused.txt");
        for task in tasks {
            store.add(task).unwrap();
        }
        store
    }

    #[test]
    fn test_add_returns_number() {
        let mut store = TaskStore::new("unused.txt");
        assert_eq!(store.add(task("a", Priority::Low, Date::default())).unwrap(), 1);
        assert_eq!(store.add(task("b", Priority::Low, Date::default())).unwrap(), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_rejects_multiline_text() {
        let mut store = TaskStore::new("unused.txt");
        let bad = task("line one\nline two", Priority::Low, Date::default());
        assert!(matches!(store.add(bad), Err(TaskError::MultilineText { field: "title" })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_sort_by_priority_is_stable_descending() {
        let d = Date::default();
        let mut store = store_with(vec![
            task("low", Priority::Low, d),
            task("high-1", Priority::High, d),
            task("medium", Priority::Medium, d),
            task("high-2", Priority::High, d),
        ]);
        store.sort_by_priority();
        assert_eq!(titles(&store), ["high-1", "high-2", "medium", "low"]);
    }

    #[test]
    fn test_sort_by_deadline_is_stable_ascending() {
        let mut store = store_with(vec![
            task("late", Priority::Low, Date::new(1, 6, 2025)),
            task("same-1", Priority::Low, Date::new(1, 3, 2025)),
            task("early", Priority::Low, Date::new(1, 1, 2025)),
            task("same-2", Priority::High, Date::new(1, 3, 2025)),
        ]);
        store.sort_by_deadline();
        assert_eq!(titles(&store), ["early", "same-1", "same-2", "late"]);
    }

    #[test]
    fn test_remove_shifts_later_numbers() {
        let d = Date::default();
        let mut store = store_with(vec![task("a", Priority::Low, d), task("b", Priority::Low, d), task("c", Priority::Low, d)]);

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.title(), "b");

        store.mark_done(1).unwrap();
        assert_eq!(store.get(1).unwrap().title(), "c");
        assert!(store.get(1).unwrap().is_done());
        assert!(!store.get(0).unwrap().is_done());
    }

    #[test]
    fn test_out_of_range_leaves_store_untouched() {
        let mut empty = TaskStore::new("unused.txt");
        assert!(matches!(empty.mark_done(0), Err(TaskError::OutOfRange { index: 0, len: 0 })));
        assert!(matches!(empty.remove(0), Err(TaskError::OutOfRange { .. })));

        let mut store = store_with(vec![task("a", Priority::Low, Date::default())]);
        assert!(store.mark_done(1).is_err());
        assert!(store.remove(5).is_err());
        assert_eq!(store.len(), 1);
        assert!(!store.get(0).unwrap().is_done());
    }

    #[test]
    fn test_filters_keep_list_numbers() {
        let today = Date::new(10, 5, 2025);
        let mut store = store_with(vec![
            task("past", Priority::Low, Date::new(1, 5, 2025)),
            task("future", Priority::Low, Date::new(1, 6, 2025)),
            task("past-done", Priority::Low, Date::new(2, 5, 2025)),
        ]);
        store.mark_done(2).unwrap();

        let done: Vec<usize> = store.with_status(true).map(|(n, _)| n).collect();
        let pending: Vec<usize> = store.with_status(false).map(|(n, _)| n).collect();
        let overdue: Vec<usize> = store.overdue_on(today).map(|(n, _)| n).collect();
        assert_eq!(done, [3]);
        assert_eq!(pending, [1, 2]);
        assert_eq!(overdue, [1]);
    }

    #[test]
    fn test_listings() {
        let mut store = TaskStore::new("unused.txt");
        assert_eq!(store.list(), "\nNo tasks to display.\n");
        assert_eq!(store.list_by_status(true), "\nNo completed tasks.\n");
        assert_eq!(store.list_overdue_on(Date::new(1, 1, 2025)), "\nNo overdue tasks. Good job!\n");

        store.add(task("a", Priority::Low, Date::new(1, 1, 2020))).unwrap();
        store.add(task("b", Priority::Low, Date::new(1, 1, 2030))).unwrap();
        store.mark_done(1).unwrap();

        assert!(store.list().contains("  TASK #2\n"));
        assert!(store.list_by_status(true).contains("Task #2:"));
        assert!(!store.list_by_status(true).contains("Task #1:"));
        assert!(store.list_overdue_on(Date::new(1, 1, 2025)).contains("Task #1:"));
    }

    #[test]
    fn test_failed_load_blocks_save() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = TaskStore::new(temp.path());
        assert!(store.load().is_err());
        assert!(store.load_failed());

        store.add(task("New", Priority::Low, Date::new(1, 1, 2030))).unwrap();
        assert!(matches!(store.save(), Err(TaskError::UnreadFile(path)) if path == temp.path()));
        assert!(temp.path().is_dir());
    }

    #[test]
    fn test_missing_file_does_not_block_save() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = TaskStore::new(temp.path().join("tasks.txt"));
        assert_eq!(store.load().unwrap(), 0);
        assert!(!store.load_failed());
        store.save().unwrap();
    }
}
