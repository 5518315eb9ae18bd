use chrono::{DateTime, Utc};
use std::time::Duration;

/// One processed command, kept so that an `open` can be undone
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HistoryEntry {
    pub(crate) command: String,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) app_opened: Option<String>,
}

impl HistoryEntry {
    pub(crate) fn new(command: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            command: command.into(),
            timestamp,
            app_opened: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Task {
    pub(crate) text: String,
    pub(crate) done: bool,
}

/// Key combinations the assistant sends to the foreground window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyCombo {
    Enter,
    /// Alt+F4
    CloseWindow,
    /// Ctrl+W
    CloseTab,
    /// Ctrl+Tab
    NextTab,
    /// Ctrl+Shift+Tab
    PreviousTab,
}

/// UI automation that runs after the reply has been produced
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FollowUp {
    /// Wait for the launched app, type the text, confirm with Enter
    TypeText { text: String, settle: Duration },
    /// Wait, then send one key combination
    Hotkey { combo: KeyCombo, settle: Duration },
}

/// What a handler hands back to the dispatcher
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Reply {
    pub(crate) text: String,
    pub(crate) follow_up: Option<FollowUp>,
    pub(crate) ends_session: bool,
}

impl Reply {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub(crate) fn silent() -> Self {
        Self::default()
    }

    pub(crate) fn with_follow_up(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = Some(follow_up);
        self
    }

    pub(crate) fn ending_session(mut self) -> Self {
        self.ends_session = true;
        self
    }
}
