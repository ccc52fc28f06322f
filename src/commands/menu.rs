//! Interactive menu.
//!
//! The loop keeps the whole session in memory and saves once, after the
//! loop ends. Index and validation errors from a single action are reported
//! and the menu continues; a failing terminal ends the session, which is
//! still saved.

use super::{
    add, delete, done, list, save_store,
    sort::{self, SortKey},
};
use crate::{
    libs::{
        date::Date,
        error::TaskError,
        messages::Message,
        priority::Priority,
        store::TaskStore,
        task::{validate_single_line, Task, TaskKind},
        view::Listing,
    },
    msg_error, msg_info, msg_print,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    List(Listing),
    MarkDone,
    Delete,
    Sort(SortKey),
    Exit,
}

/// Menu entries in display order, 1 through 9 and then 0.
const ACTIONS: [MenuAction; 10] = [
    MenuAction::Add,
    MenuAction::List(Listing::All),
    MenuAction::List(Listing::Completed),
    MenuAction::List(Listing::Pending),
    MenuAction::List(Listing::Overdue),
    MenuAction::MarkDone,
    MenuAction::Delete,
    MenuAction::Sort(SortKey::Priority),
    MenuAction::Sort(SortKey::Deadline),
    MenuAction::Exit,
];

impl MenuAction {
    fn label(&self) -> Message {
        match self {
            MenuAction::Add => Message::MenuAdd,
            MenuAction::List(Listing::All) => Message::MenuListAll,
            MenuAction::List(Listing::Completed) => Message::MenuListCompleted,
            MenuAction::List(Listing::Pending) => Message::MenuListPending,
            MenuAction::List(Listing::Overdue) => Message::MenuListOverdue,
            MenuAction::MarkDone => Message::MenuMarkDone,
            MenuAction::Delete => Message::MenuDelete,
            MenuAction::Sort(SortKey::Priority) => Message::MenuSortPriority,
            MenuAction::Sort(SortKey::Deadline) => Message::MenuSortDeadline,
            MenuAction::Exit => Message::MenuExit,
        }
    }
}

pub fn cmd(mut store: TaskStore) -> Result<()> {
    let outcome = run(&mut store);
    finish(&store, outcome)
}

/// Saves the session however the loop ended and passes its outcome on.
fn finish(store: &TaskStore, outcome: Result<()>) -> Result<()> {
    if save_store(store) && outcome.is_ok() {
        msg_print!(Message::Goodbye);
    }
    outcome
}

fn run(store: &mut TaskStore) -> Result<()> {
    let theme = ColorfulTheme::default();
    let labels: Vec<String> = ACTIONS.iter().map(|action| action.label().to_string()).collect();

    loop {
        print_header();
        let choice = Select::with_theme(&theme)
            .with_prompt(Message::PromptMenuChoice.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        let action = ACTIONS[choice];
        if action == MenuAction::Exit {
            return Ok(());
        }

        match perform(action, store, &theme) {
            Ok(()) => {}
            Err(err) if err.is::<TaskError>() => msg_error!(Message::TaskCommandFailed(err.to_string())),
            Err(err) => return Err(err),
        }
    }
}

fn print_header() {
    let heavy = "=".repeat(50);
    msg_print!(format!("\n{heavy}\n            {}\n{heavy}", Message::MenuTitle));
}

fn perform(action: MenuAction, store: &mut TaskStore, theme: &ColorfulTheme) -> Result<()> {
    match action {
        MenuAction::Add => {
            let task = prompt_task(theme)?;
            add::add_task(store, task)
        }
        MenuAction::List(listing) => {
            msg_print!(list::render(store, listing));
            Ok(())
        }
        MenuAction::MarkDone => {
            let number = prompt_task_number(theme, Message::PromptNumberToMarkDone)?;
            done::mark_done(store, number)
        }
        MenuAction::Delete => {
            let number = prompt_task_number(theme, Message::PromptNumberToDelete)?;
            delete::confirm_and_remove(store, number, false)
        }
        MenuAction::Sort(key) => {
            sort::sort(store, key);
            Ok(())
        }
        MenuAction::Exit => Ok(()),
    }
}

fn prompt_task(theme: &ColorfulTheme) -> Result<Task> {
    msg_print!(Message::NewTaskHeader, true);

    let title: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTitle.to_string())
        .validate_with(|input: &String| validate_single_line("title", input).map_err(|err| err.to_string()))
        .interact_text()?;

    let description: String = Input::with_theme(theme)
        .with_prompt(Message::PromptDescription.to_string())
        .allow_empty(true)
        .validate_with(|input: &String| validate_single_line("description", input).map_err(|err| err.to_string()))
        .interact_text()?;

    let priority = prompt_in_range(theme, Message::PromptPriority, 1, 3)?;

    let created = Date::today();
    msg_info!(Message::CreationDateToday(created.to_string()));

    let deadline: String = Input::with_theme(theme)
        .with_prompt(Message::PromptDeadline.to_string())
        .validate_with(|input: &String| Date::parse_strict(input).map(|_| ()).map_err(|err| err.to_string()))
        .interact_text()?;
    let deadline = Date::parse_strict(&deadline)?;

    let kinds = [Message::PromptTaskKindNormal.to_string(), Message::PromptTaskKindSpecial.to_string()];
    let kind = match Select::with_theme(theme)
        .with_prompt(Message::PromptTaskKind.to_string())
        .items(&kinds)
        .default(0)
        .interact()?
    {
        0 => TaskKind::Plain,
        _ => TaskKind::Deadline,
    };

    Ok(Task::from_parts(kind, &title, &description, Priority::new(priority), created, deadline, false))
}

/// Re-prompts until the answer is an integer within `min..=max`.
fn prompt_in_range(theme: &ColorfulTheme, prompt: Message, min: i64, max: i64) -> Result<i64> {
    let range_msg = Message::NumberOutOfRange(min, max).to_string();
    let value: i64 = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .validate_with(|input: &i64| {
            if (min..=max).contains(input) {
                Ok(())
            } else {
                Err(range_msg.clone())
            }
        })
        .interact_text()?;
    Ok(value)
}

fn prompt_task_number(theme: &ColorfulTheme, prompt: Message) -> Result<usize> {
    let too_small_msg = Message::NumberTooSmall(1).to_string();
    let number: u64 = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .validate_with(|input: &u64| {
            if *input >= 1 {
                Ok(())
            } else {
                Err(too_small_msg.clone())
            }
        })
        .interact_text()?;
    Ok(number as usize)
}
