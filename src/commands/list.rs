use crate::{
    libs::{
        date::Date,
        store::TaskStore,
        task::Task,
        view::{Listing, View},
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    Done,
    Pending,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only completed or only pending tasks
    #[arg(long, value_enum, conflicts_with = "overdue")]
    status: Option<StatusFilter>,

    /// Only pending tasks whose deadline has passed
    #[arg(long)]
    overdue: bool,

    /// Compact table instead of one block per task
    #[arg(long)]
    table: bool,
}

impl ListArgs {
    fn listing(&self) -> Listing {
        match (self.status, self.overdue) {
            (_, true) => Listing::Overdue,
            (Some(StatusFilter::Done), false) => Listing::Completed,
            (Some(StatusFilter::Pending), false) => Listing::Pending,
            (None, false) => Listing::All,
        }
    }
}

pub fn cmd(args: ListArgs, store: &TaskStore) -> Result<()> {
    let listing = args.listing();

    if args.table {
        let entries = select(store, listing, Date::today());
        if entries.is_empty() {
            msg_info!(listing.empty_text());
        } else {
            View::table(entries).printstd();
        }
        return Ok(());
    }

    msg_print!(render(store, listing));
    Ok(())
}

/// The banner rendering used by both the `list` command and the menu.
pub(crate) fn render(store: &TaskStore, listing: Listing) -> String {
    match listing {
        Listing::All => store.list(),
        Listing::Completed => store.list_by_status(true),
        Listing::Pending => store.list_by_status(false),
        Listing::Overdue => store.list_overdue(),
    }
}

fn select(store: &TaskStore, listing: Listing, today: Date) -> Vec<(usize, &Task)> {
    match listing {
        Listing::All => store.entries().collect(),
        Listing::Completed => store.with_status(true).collect(),
        Listing::Pending => store.with_status(false).collect(),
        Listing::Overdue => store.overdue_on(today).collect(),
    }
}
