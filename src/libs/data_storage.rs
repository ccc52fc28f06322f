//! Per-user data directory holding `config.json` and the default task file.

use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "todolist";

/// Overrides the per-user data directory when set.
pub const HOME_ENV: &str = "TODOLIST_HOME";

/// Per-user directory holding the configuration and the default task file.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    /// `$TODOLIST_HOME` if set, otherwise the platform data directory.
    pub fn new() -> Self {
        if let Ok(home) = var(HOME_ENV) {
            return Self::at(home);
        }

        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };

        Self::at(Path::new(&base_path).join(APP_NAME))
    }

    /// A storage rooted at an explicit directory.
    pub fn at(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the directory, creating the directory on demand.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_path_creates_directory() {
        let temp = tempfile::tempdir().unwrap();
        let storage = DataStorage::at(temp.path().join("nested").join("dir"));
        let path = storage.get_path("tasks.txt").unwrap();
        assert!(storage.base_path().is_dir());
        assert_eq!(path, temp.path().join("nested").join("dir").join("tasks.txt"));
    }
}
