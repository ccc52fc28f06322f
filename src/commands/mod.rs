pub mod add;
pub mod delete;
pub mod done;
pub mod init;
pub mod list;
pub mod menu;
pub mod sort;

use crate::libs::config::Config;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_debug, msg_error, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Interactive menu (default when no command is given)")]
    Menu,
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Mark a task as done")]
    Done(done::DoneArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Reorder the task list")]
    Sort(sort::SortArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let file = self.file.as_deref();
        match self.command {
            None | Some(Commands::Menu) => menu::cmd(open_store(file)?),
            Some(Commands::Add(args)) => with_store(file, |store| add::cmd(args, store)),
            Some(Commands::List(args)) => list::cmd(args, &open_store(file)?),
            Some(Commands::Done(args)) => with_store(file, |store| done::cmd(args, store)),
            Some(Commands::Delete(args)) => with_store(file, |store| delete::cmd(args, store)),
            Some(Commands::Sort(args)) => with_store(file, |store| sort::cmd(args, store)),
            Some(Commands::Init(args)) => init::cmd(args),
        }
    }
}

/// Resolves the task file and loads it.
///
/// An unreadable file is reported and treated as an empty list. The store
/// remembers the failure and will not save over that file.
pub fn open_store(file: Option<&Path>) -> Result<TaskStore> {
    let path = Config::read()?.data_file_path(file)?;
    let mut store = TaskStore::new(&path);

    match store.load() {
        Ok(count) => msg_debug!(Message::TasksLoaded(count, path.display().to_string())),
        Err(err) => msg_warning!(Message::LoadFailed(path.display().to_string(), err.to_string())),
    }

    Ok(store)
}

/// Saves the store, reporting a failure instead of returning it. In-memory
/// state is kept either way; returns whether the file was written.
pub fn save_store(store: &TaskStore) -> bool {
    match store.save() {
        Ok(()) => true,
        Err(err) => {
            msg_error!(Message::SaveFailed(store.path().display().to_string(), err.to_string()));
            false
        }
    }
}

/// Loads the store, runs a mutating command and saves if it succeeded.
///
/// A data file that exists but could not be read fails the command before
/// the action runs; its contents would otherwise be lost on save.
pub fn with_store<F>(file: Option<&Path>, action: F) -> Result<()>
where
    F: FnOnce(&mut TaskStore) -> Result<()>,
{
    let mut store = open_store(file)?;
    if store.load_failed() {
        return Err(TaskError::UnreadFile(store.path().to_path_buf()).into());
    }
    action(&mut store)?;
    save_store(&store);
    Ok(())
}

/// Task numbers are 1-based; 0 maps to an index no store has.
pub(crate) fn index_of(number: usize) -> usize {
    number.checked_sub(1).unwrap_or(usize::MAX)
}
