//! Core module - session state and the types shared by every handler

mod catalog;
mod normalize;
mod state;
mod types;

pub(crate) use catalog::AppCatalog;
pub(crate) use normalize::normalize;
pub(crate) use state::StateStore;
pub(crate) use types::{FollowUp, HistoryEntry, KeyCombo, Reply, Task};
