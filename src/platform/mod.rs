//! Collaborator abstraction layer
//!
//! Every side effect the interpreter triggers goes through one of these
//! traits, so the dispatch engine can be exercised against fakes and the
//! desktop implementations stay thin.

mod clock;
mod desktop;
#[cfg(test)]
pub(crate) mod fake;
mod lookup;
mod system;

use chrono::{DateTime, Utc};

use crate::config::AssistantConfig;
use crate::core::KeyCombo;
use crate::error::ServiceError;

pub(crate) use clock::SystemClock;
pub(crate) use desktop::{CommandLauncher, EnigoKeyboard, SystemBrowser};
pub(crate) use lookup::{DuckDuckGo, Wikipedia};
pub(crate) use system::{HostMetrics, HostProcesses};

/// Starts a program by path
pub(crate) trait Launcher {
    fn spawn(&mut self, path: &str) -> Result<(), ServiceError>;
}

pub(crate) trait Browser {
    /// Open a URL with the system default handler
    fn open(&mut self, url: &str) -> Result<(), ServiceError>;

    /// Open a URL in a new tab, in `browser` when given
    fn open_new_tab(&mut self, browser: Option<&str>, url: &str) -> Result<(), ServiceError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProcessInfo {
    pub(crate) name: String,
    pub(crate) pid: u32,
}

pub(crate) trait ProcessTable {
    fn list_processes(&mut self) -> Vec<ProcessInfo>;
    fn terminate(&mut self, pid: u32) -> Result<(), ServiceError>;
}

/// Synthesises keystrokes into the foreground window
pub(crate) trait Keyboard {
    fn type_text(&mut self, text: &str) -> Result<(), ServiceError>;
    fn press(&mut self, combo: KeyCombo) -> Result<(), ServiceError>;
}

pub(crate) trait Encyclopedia {
    fn summary(&self, topic: &str, max_sentences: usize) -> Result<String, ServiceError>;
}

/// Result of an instant-answer query
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct InstantAnswer {
    pub(crate) abstract_text: String,
    pub(crate) related: Vec<String>,
}

impl InstantAnswer {
    /// The abstract when present, else the first non-empty related topic
    pub(crate) fn best_text(&self) -> Option<&str> {
        if !self.abstract_text.trim().is_empty() {
            return Some(&self.abstract_text);
        }
        self.related
            .iter()
            .map(String::as_str)
            .find(|t| !t.trim().is_empty())
    }
}

pub(crate) trait InstantAnswers {
    fn lookup(&self, query: &str) -> Result<InstantAnswer, ServiceError>;
}

pub(crate) trait SystemMetrics {
    fn cpu_percent(&mut self) -> Result<f32, ServiceError>;
    fn memory_percent(&mut self) -> Result<f32, ServiceError>;
    fn disk_percent(&mut self) -> Result<f32, ServiceError>;
}

pub(crate) trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The full set of collaborators a session talks to
pub(crate) struct Platform {
    pub(crate) launcher: Box<dyn Launcher>,
    pub(crate) browser: Box<dyn Browser>,
    pub(crate) processes: Box<dyn ProcessTable>,
    pub(crate) keyboard: Box<dyn Keyboard>,
    pub(crate) encyclopedia: Box<dyn Encyclopedia>,
    pub(crate) instant_answers: Box<dyn InstantAnswers>,
    pub(crate) metrics: Box<dyn SystemMetrics>,
    pub(crate) clock: Box<dyn Clock>,
}

impl Platform {
    /// Real OS, browser and network collaborators
    pub(crate) fn desktop(config: &AssistantConfig) -> Self {
        Self {
            launcher: Box::new(CommandLauncher),
            browser: Box::new(SystemBrowser),
            processes: Box::new(HostProcesses::new()),
            keyboard: Box::new(EnigoKeyboard::default()),
            encyclopedia: Box::new(Wikipedia::new()),
            instant_answers: Box::new(DuckDuckGo::new(config.answer_timeout)),
            metrics: Box::new(HostMetrics::new()),
            clock: Box::new(SystemClock),
        }
    }
}
