//! Notes, tasks and custom app registration

use regex::Captures;

use super::{Context, capture};
use crate::core::Reply;
use crate::output::{format_notes, format_tasks};

pub(crate) fn add_note(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    let note = ctx.command.replace("remind me to", "");
    let note = note.trim();
    if note.is_empty() {
        return Reply::text("Please specify what you'd like me to remind you about.");
    }
    ctx.state.add_note(note);
    Reply::text(format!("I'll remind you to {note}"))
}

pub(crate) fn show_notes(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text(format_notes(ctx.state.list_notes()))
}

pub(crate) fn clear_notes(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    ctx.state.clear_notes();
    Reply::text("All reminders have been cleared.")
}

pub(crate) fn add_task(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    let task = ctx.command.replace("add task", "");
    let task = task.trim();
    if task.is_empty() {
        return Reply::text("Please specify the task.");
    }
    ctx.state.add_task(task);
    Reply::text(format!("Task added: {task}"))
}

pub(crate) fn show_tasks(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text(format_tasks(ctx.state.list_tasks()))
}

/// Every digit in the utterance, read as one 1-based task number
pub(crate) fn complete_task(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    let digits: String = ctx.command.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Reply::text("Please specify the task number to complete.");
    }
    // Only overflow can fail here; such a number is out of range anyway
    let number = digits.parse::<usize>().unwrap_or(usize::MAX);
    match ctx.state.complete_task(number) {
        Ok(()) => Reply::text(format!("Marked task {number} as completed.")),
        Err(e) => Reply::text(e.to_string()),
    }
}

pub(crate) fn clear_tasks(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    ctx.state.clear_tasks();
    Reply::text("All tasks have been cleared.")
}

/// "add app path <path> as <name>"
pub(crate) fn register_app(ctx: &mut Context<'_>, caps: &Captures<'_>) -> Reply {
    match (capture(caps, 1), capture(caps, 2)) {
        (Some(path), Some(name)) => {
            ctx.state.register_custom_app(name, path);
            Reply::text(format!("Added {name} with path: {path}"))
        }
        _ => Reply::text("Please specify both the path and name for the app."),
    }
}
