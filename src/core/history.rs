//! Log of visited states.
//!
//! The log is ordered oldest first and is never empty: it is seeded with the
//! initial state and only [`History::pop`] removes entries, which refuses to
//! remove the last one.

use super::id::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One visited state and when it was entered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The state that became current
    pub state: StateId,
    /// When it became current
    pub entered_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn now(state: StateId) -> Self {
        Self {
            state,
            entered_at: Utc::now(),
        }
    }
}

/// Chronological path of visited states.
///
/// # Example
///
/// ```rust
/// use rewind::{History, StateId};
///
/// let mut history = History::new(StateId::from("idle"));
/// history.push(StateId::from("running"));
///
/// assert_eq!(history.path(), vec!["idle", "running"]);
///
/// let popped = history.pop();
/// assert_eq!(popped.unwrap(), "running");
/// assert_eq!(history.len(), 1);
/// assert!(history.pop().is_none());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    entries: Vec<HistoryEntry>,
}

#[derive(Deserialize)]
struct RawHistory {
    entries: Vec<HistoryEntry>,
}

impl TryFrom<RawHistory> for History {
    type Error = &'static str;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.entries.is_empty() {
            return Err("history must hold at least one entry");
        }
        Ok(Self {
            entries: raw.entries,
        })
    }
}

impl History {
    /// Start a history holding only `initial`.
    pub fn new(initial: StateId) -> Self {
        Self {
            entries: vec![HistoryEntry::now(initial)],
        }
    }

    /// Append a newly entered state.
    pub fn push(&mut self, state: StateId) {
        self.entries.push(HistoryEntry::now(state));
    }

    /// Remove and return the newest entry.
    ///
    /// Returns `None` without touching the log when only one entry is left.
    pub fn pop(&mut self) -> Option<StateId> {
        if self.entries.len() > 1 {
            self.entries.pop().map(|entry| entry.state)
        } else {
            None
        }
    }

    /// Drop everything and start again from `initial`.
    pub fn reseed(&mut self, initial: StateId) {
        self.entries.clear();
        self.entries.push(HistoryEntry::now(initial));
    }

    /// Newest entry's state.
    pub fn last(&self) -> &StateId {
        // entries is never empty
        &self.entries[self.entries.len() - 1].state
    }

    /// Number of entries, always at least one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when `len() == 0`, which a constructed history never is.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// States in visiting order, oldest first.
    pub fn path(&self) -> Vec<&StateId> {
        self.entries.iter().map(|entry| &entry.state).collect()
    }

    /// All entries with their timestamps.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Time between the oldest and newest entry.
    ///
    /// Returns `None` for a single-entry history.
    pub fn duration(&self) -> Option<Duration> {
        if self.entries.len() < 2 {
            return None;
        }
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        last.entered_at
            .signed_duration_since(first.entered_at)
            .to_std()
            .ok()
    }
}
