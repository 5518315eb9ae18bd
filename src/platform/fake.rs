//! Recording collaborators for tests
//!
//! Every fake writes into one shared journal so a test can hand the boxed
//! fakes to a processor and still inspect what happened afterwards.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};

use super::{
    Browser, Clock, Encyclopedia, InstantAnswer, InstantAnswers, Keyboard, Launcher, Platform,
    ProcessInfo, ProcessTable, SystemMetrics,
};
use crate::core::KeyCombo;
use crate::error::ServiceError;

#[derive(Debug, Default)]
pub(crate) struct Journal {
    pub(crate) spawned: Vec<String>,
    pub(crate) opened: Vec<String>,
    pub(crate) new_tabs: Vec<(Option<String>, String)>,
    pub(crate) typed: Vec<String>,
    pub(crate) pressed: Vec<KeyCombo>,
    pub(crate) process_scans: usize,
    pub(crate) terminated: Vec<u32>,
    pub(crate) encyclopedia_queries: Vec<String>,
    pub(crate) answer_queries: Vec<String>,

    // Canned behaviour
    pub(crate) running: Vec<ProcessInfo>,
    pub(crate) fail_launch: bool,
    pub(crate) fail_keyboard: bool,
    pub(crate) articles: HashMap<String, String>,
    pub(crate) instant_answer: Option<InstantAnswer>,
    pub(crate) metrics: Option<(f32, f32, f32)>,
}

pub(crate) type SharedJournal = Rc<RefCell<Journal>>;

struct Fake(SharedJournal);

impl Launcher for Fake {
    fn spawn(&mut self, path: &str) -> Result<(), ServiceError> {
        let mut journal = self.0.borrow_mut();
        if journal.fail_launch {
            return Err(ServiceError::Launch {
                path: path.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        journal.spawned.push(path.to_string());
        Ok(())
    }
}

impl Browser for Fake {
    fn open(&mut self, url: &str) -> Result<(), ServiceError> {
        self.0.borrow_mut().opened.push(url.to_string());
        Ok(())
    }

    fn open_new_tab(&mut self, browser: Option<&str>, url: &str) -> Result<(), ServiceError> {
        self.0
            .borrow_mut()
            .new_tabs
            .push((browser.map(str::to_string), url.to_string()));
        Ok(())
    }
}

impl ProcessTable for Fake {
    fn list_processes(&mut self) -> Vec<ProcessInfo> {
        let mut journal = self.0.borrow_mut();
        journal.process_scans += 1;
        journal.running.clone()
    }

    fn terminate(&mut self, pid: u32) -> Result<(), ServiceError> {
        let mut journal = self.0.borrow_mut();
        journal.running.retain(|p| p.pid != pid);
        journal.terminated.push(pid);
        Ok(())
    }
}

impl Keyboard for Fake {
    fn type_text(&mut self, text: &str) -> Result<(), ServiceError> {
        let mut journal = self.0.borrow_mut();
        if journal.fail_keyboard {
            return Err(ServiceError::Automation("no display".to_string()));
        }
        journal.typed.push(text.to_string());
        Ok(())
    }

    fn press(&mut self, combo: KeyCombo) -> Result<(), ServiceError> {
        let mut journal = self.0.borrow_mut();
        if journal.fail_keyboard {
            return Err(ServiceError::Automation("no display".to_string()));
        }
        journal.pressed.push(combo);
        Ok(())
    }
}

impl Encyclopedia for Fake {
    fn summary(&self, topic: &str, _max_sentences: usize) -> Result<String, ServiceError> {
        let mut journal = self.0.borrow_mut();
        journal.encyclopedia_queries.push(topic.to_string());
        journal
            .articles
            .get(topic)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(topic.to_string()))
    }
}

impl InstantAnswers for Fake {
    fn lookup(&self, query: &str) -> Result<InstantAnswer, ServiceError> {
        let mut journal = self.0.borrow_mut();
        journal.answer_queries.push(query.to_string());
        journal
            .instant_answer
            .clone()
            .ok_or_else(|| ServiceError::NotFound(query.to_string()))
    }
}

impl SystemMetrics for Fake {
    fn cpu_percent(&mut self) -> Result<f32, ServiceError> {
        self.0
            .borrow()
            .metrics
            .map(|m| m.0)
            .ok_or(ServiceError::Metrics("unavailable"))
    }

    fn memory_percent(&mut self) -> Result<f32, ServiceError> {
        self.0
            .borrow()
            .metrics
            .map(|m| m.1)
            .ok_or(ServiceError::Metrics("unavailable"))
    }

    fn disk_percent(&mut self) -> Result<f32, ServiceError> {
        self.0
            .borrow()
            .metrics
            .map(|m| m.2)
            .ok_or(ServiceError::Metrics("unavailable"))
    }
}

pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 2026-03-02 14:05:07 UTC; unix time 1772460307, which is 2 mod 5 and 1 mod 3
pub(crate) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 14, 5, 7).unwrap()
}

pub(crate) fn platform() -> (Platform, SharedJournal) {
    platform_at(fixed_time())
}

pub(crate) fn platform_at(now: DateTime<Utc>) -> (Platform, SharedJournal) {
    let journal = SharedJournal::default();
    let fake = || Box::new(Fake(Rc::clone(&journal)));
    let platform = Platform {
        launcher: fake(),
        browser: fake(),
        processes: fake(),
        keyboard: fake(),
        encyclopedia: fake(),
        instant_answers: fake(),
        metrics: fake(),
        clock: Box::new(FixedClock(now)),
    };
    (platform, journal)
}
