//! Configuration initialization command.
//!
//! Asks where the task file should live and records the answer in
//! `config.json`, or removes the configuration with `--delete`.

use crate::{
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let storage = DataStorage::new();

    if init_args.delete {
        Config::delete_from(&storage)?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    let config = Config::init(&storage)?;
    let path = config.save_to(&storage)?;

    msg_success!(Message::ConfigSaved(path.display().to_string()));
    msg_info!(Message::DataFileInUse(config.data_file_path_in(&storage, None)?.display().to_string()));
    Ok(())
}
