mod format;
mod table;

pub(crate) use format::{format_capabilities, format_notes, format_tasks, shorten};
pub(crate) use table::render_history_table;
