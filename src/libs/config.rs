//! Configuration for todolist.
//!
//! The configuration is a small JSON file, `config.json`, in the data
//! directory (see [`DataStorage`]). It only records where the task file
//! lives; everything else has fixed behavior.
//!
//! ## Resolving the task file
//!
//! 1. `--file PATH` on the command line
//! 2. `data_file` from `config.json`
//! 3. `tasks.txt` inside the data directory
//!
//! ```rust,no_run
//! use todolist::libs::config::Config;
//!
//! let config = Config::read()?;
//! let path = config.data_file_path(None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default task file name inside the data directory.
pub const DATA_FILE_NAME: &str = "tasks.txt";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Explicit location of the task file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Reads `config.json` from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration kept in `storage`; a missing file yields the default.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        self.save_to(&DataStorage::new())
    }

    /// Writes pretty-printed JSON and returns the file written.
    pub fn save_to(&self, storage: &DataStorage) -> Result<PathBuf> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(config_file_path)
    }

    /// Removes `config.json` from `storage`; a missing file is not an error.
    pub fn delete_from(storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    pub fn data_file_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        self.data_file_path_in(&DataStorage::new(), cli_override)
    }

    /// Applies the override, then the configured path, then the storage default.
    pub fn data_file_path_in(&self, storage: &DataStorage, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.data_file {
            return Ok(path.clone());
        }
        Ok(storage.get_path(DATA_FILE_NAME)?)
    }

    /// Asks for the task file location, using the current one as default.
    pub fn init(storage: &DataStorage) -> Result<Config> {
        let mut config = Self::read_from(storage)?;
        let current = config.data_file_path_in(storage, None)?;

        let data_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataFile.to_string())
            .default(current.display().to_string())
            .interact_text()?;

        let data_file = PathBuf::from(data_file.trim());
        let default_path = storage.get_path(DATA_FILE_NAME)?;
        config.data_file = if data_file == default_path { None } else { Some(data_file) };

        Ok(config)
    }
}
