use crate::{
    libs::{
        date::Date,
        messages::Message,
        priority::Priority,
        store::TaskStore,
        task::{Task, TaskKind},
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Longer description
    #[arg(short, long, default_value = "")]
    description: String,

    /// 1 = Low, 2 = Medium, 3 = High
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=3))]
    priority: i64,

    /// Deadline as "day month year" or day/month/year
    #[arg(long, value_parser = parse_deadline)]
    deadline: Date,

    /// Mark this as a special deadline task
    #[arg(long)]
    special: bool,
}

fn parse_deadline(value: &str) -> Result<Date, String> {
    Date::parse_strict(value).map_err(|err| err.to_string())
}

pub fn cmd(args: AddArgs, store: &mut TaskStore) -> Result<()> {
    let kind = if args.special { TaskKind::Deadline } else { TaskKind::Plain };
    let task = Task::new(kind, &args.title, &args.description, Priority::new(args.priority), args.deadline);
    add_task(store, task)
}

pub(crate) fn add_task(store: &mut TaskStore, task: Task) -> Result<()> {
    let number = store.add(task)?;
    msg_success!(Message::TaskAdded(number));
    Ok(())
}
