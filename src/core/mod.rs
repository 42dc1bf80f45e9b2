//! Plain data the engine operates on.
//!
//! - Identifiers for states and events
//! - The declarative configuration
//! - The log of visited states

mod config;
mod history;
mod id;

pub use config::{Config, StateDefinition};
pub use history::{History, HistoryEntry};
pub use id::{EventId, StateId};
