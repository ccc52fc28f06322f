use super::index_of;
use crate::{
    libs::{messages::Message, store::TaskStore},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task number as shown by `list`
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    number: u64,
}

pub fn cmd(args: DoneArgs, store: &mut TaskStore) -> Result<()> {
    mark_done(store, args.number as usize)
}

pub(crate) fn mark_done(store: &mut TaskStore, number: usize) -> Result<()> {
    store.mark_done(index_of(number))?;
    msg_success!(Message::TaskMarkedDone(number));
    Ok(())
}
