use crate::{
    libs::{messages::Message, store::TaskStore},
    msg_success,
};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// High priority first
    Priority,
    /// Earliest deadline first
    Deadline,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    #[arg(value_enum)]
    by: SortKey,
}

pub fn cmd(args: SortArgs, store: &mut TaskStore) -> Result<()> {
    sort(store, args.by);
    Ok(())
}

pub(crate) fn sort(store: &mut TaskStore, key: SortKey) {
    match key {
        SortKey::Priority => {
            store.sort_by_priority();
            msg_success!(Message::SortedByPriority);
        }
        SortKey::Deadline => {
            store.sort_by_deadline();
            msg_success!(Message::SortedByDeadline);
        }
    }
}
