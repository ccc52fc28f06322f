use super::index_of;
use crate::{
    libs::{messages::Message, store::TaskStore},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task number as shown by `list`
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    number: u64,

    /// Skip the confirmation question
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs, store: &mut TaskStore) -> Result<()> {
    confirm_and_remove(store, args.number as usize, args.yes)
}

/// Asks before removing unless `skip_confirm` is set. Numbers that match no
/// task are not asked about; they fail in the store with an index error.
pub(crate) fn confirm_and_remove(store: &mut TaskStore, number: usize, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        if let Some(task) = store.get(index_of(number)) {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptConfirmDelete(task.title().to_string()).to_string())
                .default(false)
                .interact()?;

            if !confirmed {
                msg_info!(Message::DeletionCancelled);
                return Ok(());
            }
        }
    }

    let task = store.remove(index_of(number))?;
    msg_success!(Message::TaskRemoved(number, task.title().to_string()));
    Ok(())
}
