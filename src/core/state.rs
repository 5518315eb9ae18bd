//! Session state owned by one command processor
//!
//! Notes, tasks, command history, the custom app registry and the
//! last-opened-app slot. Everything lives in memory and dies with the session.

use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::consts::MAX_HISTORY;
use crate::core::types::{HistoryEntry, Task};
use crate::error::CommandError;

#[derive(Debug, Default)]
pub(crate) struct StateStore {
    history: VecDeque<HistoryEntry>,
    notes: Vec<String>,
    tasks: Vec<Task>,
    custom_apps: HashMap<String, String>,
    builtin_apps: BTreeMap<String, String>,
    last_opened: Option<String>,
}

impl StateStore {
    pub(crate) fn new(builtin_apps: BTreeMap<String, String>) -> Self {
        Self {
            builtin_apps,
            ..Self::default()
        }
    }

    // History

    /// Append an entry, evicting the oldest once the cap is exceeded
    pub(crate) fn append_history(&mut self, entry: HistoryEntry) {
        self.history.push_back(entry);
        while self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
    }

    pub(crate) fn last_history(&self) -> Option<&HistoryEntry> {
        self.history.back()
    }

    /// Remove the most recent entry (explicit undo, not eviction)
    pub(crate) fn pop_history(&mut self) -> Option<HistoryEntry> {
        self.history.pop_back()
    }

    /// Record which app the most recent command opened
    pub(crate) fn annotate_last_opened(&mut self, app: &str) {
        if let Some(entry) = self.history.back_mut() {
            entry.app_opened = Some(app.to_string());
        }
    }

    pub(crate) fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    #[cfg(test)]
    pub(crate) fn history_len(&self) -> usize {
        self.history.len()
    }

    // Notes

    pub(crate) fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub(crate) fn list_notes(&self) -> &[String] {
        &self.notes
    }

    pub(crate) fn clear_notes(&mut self) {
        self.notes.clear();
    }

    // Tasks

    pub(crate) fn add_task(&mut self, text: impl Into<String>) {
        self.tasks.push(Task {
            text: text.into(),
            done: false,
        });
    }

    pub(crate) fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Mark the task at 1-based `index` as done
    pub(crate) fn complete_task(&mut self, index: usize) -> Result<(), CommandError> {
        let task = index
            .checked_sub(1)
            .and_then(|i| self.tasks.get_mut(i))
            .ok_or(CommandError::TaskIndexOutOfRange { index })?;
        task.done = true;
        Ok(())
    }

    pub(crate) fn clear_tasks(&mut self) {
        self.tasks.clear();
    }

    // Apps

    pub(crate) fn register_custom_app(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.custom_apps.insert(name.into(), path.into());
    }

    /// Custom registrations win over the built-in table
    pub(crate) fn resolve_app_path(&self, name: &str) -> Result<&str, CommandError> {
        self.custom_apps
            .get(name)
            .or_else(|| self.builtin_apps.get(name))
            .map(String::as_str)
            .ok_or_else(|| CommandError::AppNotFound {
                app: name.to_string(),
            })
    }

    pub(crate) fn set_last_opened(&mut self, name: impl Into<String>) {
        self.last_opened = Some(name.into());
    }

    pub(crate) fn last_opened(&self) -> Option<&str> {
        self.last_opened.as_deref()
    }

    pub(crate) fn clear_last_opened(&mut self) -> Option<String> {
        self.last_opened.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(command: &str) -> HistoryEntry {
        HistoryEntry::new(command, Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap())
    }

    fn store() -> StateStore {
        StateStore::new(BTreeMap::from([(
            "notepad".to_string(),
            "notepad.exe".to_string(),
        )]))
    }

    #[test]
    fn history_is_capped_fifo() {
        let mut state = store();
        for i in 0..MAX_HISTORY {
            state.append_history(entry(&format!("cmd {i}")));
        }
        assert_eq!(state.history_len(), MAX_HISTORY);

        state.append_history(entry("one more"));
        assert_eq!(state.history_len(), MAX_HISTORY);
        assert_eq!(state.history().next().unwrap().command, "cmd 1");
        assert_eq!(state.last_history().unwrap().command, "one more");
    }

    #[test]
    fn pop_and_annotate_touch_newest_entry() {
        let mut state = store();
        state.append_history(entry("first"));
        state.append_history(entry("open notepad"));
        state.annotate_last_opened("notepad");

        let popped = state.pop_history().unwrap();
        assert_eq!(popped.app_opened.as_deref(), Some("notepad"));
        assert_eq!(state.last_history().unwrap().command, "first");
        assert_eq!(state.last_history().unwrap().app_opened, None);
    }

    #[test]
    fn complete_task_checks_bounds() {
        let mut state = store();
        assert!(matches!(
            state.complete_task(1),
            Err(CommandError::TaskIndexOutOfRange { index: 1 })
        ));

        state.add_task("buy milk");
        state.add_task("walk dog");
        assert!(state.complete_task(0).is_err());
        assert!(state.complete_task(3).is_err());
        state.complete_task(2).unwrap();

        assert!(!state.list_tasks()[0].done);
        assert!(state.list_tasks()[1].done);
    }

    #[test]
    fn notes_and_tasks_clear_in_bulk() {
        let mut state = store();
        state.add_note("call mom");
        state.add_task("buy milk");
        state.clear_notes();
        state.clear_tasks();
        assert!(state.list_notes().is_empty());
        assert!(state.list_tasks().is_empty());
    }

    #[test]
    fn custom_apps_take_priority() {
        let mut state = store();
        assert_eq!(state.resolve_app_path("notepad").unwrap(), "notepad.exe");

        state.register_custom_app("notepad", r"c:\tools\notepad++.exe");
        state.register_custom_app("paint", "mspaint.exe");
        assert_eq!(
            state.resolve_app_path("notepad").unwrap(),
            r"c:\tools\notepad++.exe"
        );
        assert_eq!(state.resolve_app_path("paint").unwrap(), "mspaint.exe");
        assert!(matches!(
            state.resolve_app_path("gimp"),
            Err(CommandError::AppNotFound { .. })
        ));
    }

    #[test]
    fn last_opened_is_a_single_slot() {
        let mut state = store();
        state.set_last_opened("notepad");
        state.set_last_opened("chrome");
        assert_eq!(state.last_opened(), Some("chrome"));
        assert_eq!(state.clear_last_opened().as_deref(), Some("chrome"));
        assert_eq!(state.last_opened(), None);
    }
}
