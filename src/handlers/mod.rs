//! Per-intent action logic
//!
//! Every handler takes the dispatch [`Context`] plus the captures of the rule
//! that matched and returns a finished [`Reply`](crate::core::Reply).
//! Collaborator failures stop here: they are logged at debug level and turned
//! into a fixed sentence, never handed back to the caller.

pub(crate) mod apps;
pub(crate) mod calc;
pub(crate) mod chat;
pub(crate) mod memo;
pub(crate) mod system;
pub(crate) mod web;

use regex::Captures;

use crate::config::AssistantConfig;
use crate::core::StateStore;
use crate::platform::Platform;

/// Everything a handler may read or mutate while serving one utterance
pub(crate) struct Context<'a> {
    /// The normalized utterance
    pub(crate) command: &'a str,
    /// Whether `command` was appended to history before dispatch
    pub(crate) recorded: bool,
    pub(crate) state: &'a mut StateStore,
    pub(crate) platform: &'a mut Platform,
    pub(crate) config: &'a AssistantConfig,
}

impl Context<'_> {
    /// Point LastOpenedApp at `app` and tag the history entry of this command
    pub(crate) fn remember_opened(&mut self, app: &str) {
        self.state.set_last_opened(app);
        if self.recorded {
            self.state.annotate_last_opened(app);
        }
    }

    /// Deterministic pick keyed on the clock, so replies vary between calls
    /// but a fixed clock always yields the same entry
    pub(crate) fn rotate<'t>(&self, table: &[&'t str]) -> &'t str {
        let len = table.len() as i64;
        if len == 0 {
            return "";
        }
        let index = self.platform.clock.now().timestamp().rem_euclid(len);
        table[index as usize]
    }

    /// Launch target for the default browser: its registered path when known
    pub(crate) fn default_browser_target(&self) -> String {
        let browser = &self.config.default_browser;
        self.state
            .resolve_app_path(browser)
            .map(str::to_string)
            .unwrap_or_else(|_| browser.clone())
    }

    /// Open a URL in the system browser; failures are logged only
    pub(crate) fn open_url(&mut self, url: &str) {
        if let Err(e) = self.platform.browser.open(url) {
            log::debug!("Browser error: {e}");
        }
    }
}

/// Capture group `index`, trimmed, if it matched something non-blank
pub(crate) fn capture<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}
