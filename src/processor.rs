//! The command processor: one session's state, collaborators and config
//!
//! `respond` normalizes the utterance, records it, runs the first matching
//! rule and returns the reply together with any pending UI automation.
//! `process` is the plain-text entry point that also runs that automation
//! before returning.

use std::thread;

use crate::config::AssistantConfig;
use crate::consts::NOT_UNDERSTOOD;
use crate::core::{FollowUp, HistoryEntry, KeyCombo, Reply, StateStore, normalize};
use crate::error::ServiceError;
use crate::handlers::Context;
use crate::intent::find_rule;
use crate::platform::Platform;

pub(crate) struct CommandProcessor {
    state: StateStore,
    platform: Platform,
    config: AssistantConfig,
}

impl CommandProcessor {
    pub(crate) fn new(config: AssistantConfig, platform: Platform) -> Self {
        Self {
            state: StateStore::new(config.catalog.apps.clone()),
            platform,
            config,
        }
    }

    /// Handle one utterance and return the reply without running its follow-up
    pub(crate) fn respond(&mut self, utterance: &str) -> Reply {
        let Some(cmd) = normalize(utterance) else {
            return Reply::silent();
        };
        log::debug!("Processing command: '{cmd}'");

        // Undo and close must not leave an entry behind for the next undo
        let recorded = !(cmd.contains("undo") || cmd.contains("close"));
        if recorded {
            let now = self.platform.clock.now();
            self.state.append_history(HistoryEntry::new(cmd.as_str(), now));
        }

        let Some((rule, caps)) = find_rule(&cmd, &self.state, &self.config) else {
            log::debug!("No rule matched '{cmd}'");
            return Reply::text(NOT_UNDERSTOOD);
        };
        log::debug!("Matched {:?}", rule.intent);

        let mut ctx = Context {
            command: &cmd,
            recorded,
            state: &mut self.state,
            platform: &mut self.platform,
            config: &self.config,
        };
        (rule.handler)(&mut ctx, &caps)
    }

    /// Handle one utterance, run its follow-up, and return the response text
    pub(crate) fn process(&mut self, utterance: &str) -> String {
        let reply = self.respond(utterance);
        if let Some(follow_up) = &reply.follow_up {
            self.perform(follow_up);
        }
        reply.text
    }

    /// Run a follow-up; failures are logged and otherwise ignored
    pub(crate) fn perform(&mut self, follow_up: &FollowUp) {
        if let Err(e) = self.try_perform(follow_up) {
            log::warn!("UI automation failed: {e}");
        }
    }

    fn try_perform(&mut self, follow_up: &FollowUp) -> Result<(), ServiceError> {
        match follow_up {
            FollowUp::TypeText { text, settle } => {
                thread::sleep(*settle);
                self.platform.keyboard.type_text(text)?;
                self.platform.keyboard.press(KeyCombo::Enter)
            }
            FollowUp::Hotkey { combo, settle } => {
                thread::sleep(*settle);
                self.platform.keyboard.press(*combo)
            }
        }
    }

    pub(crate) fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.state.history()
    }

    pub(crate) fn config(&self) -> &AssistantConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &StateStore {
        &self.state
    }
}

/// A processor wired to recording fakes, in UTC with no automation delays
#[cfg(test)]
pub(crate) fn test_processor() -> (CommandProcessor, crate::platform::fake::SharedJournal) {
    use std::time::Duration;

    let (platform, journal) = crate::platform::fake::platform();
    let config = AssistantConfig {
        timezone: crate::utils::Timezone::Named(chrono_tz::UTC),
        settle_delay: Duration::ZERO,
        key_delay: Duration::ZERO,
        ..AssistantConfig::default()
    };
    (CommandProcessor::new(config, platform), journal)
}
