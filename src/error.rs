//! Errors raised by the state machine engine.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors returned by [`Fsm`](crate::Fsm) operations.
///
/// Every failing operation leaves the machine exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FsmError {
    /// Configuration was absent or empty at construction.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// `change_state` target is not a declared state.
    #[error("State '{state}' doesn't exist")]
    UnknownState { state: StateId },

    /// The event has no transition out of the current state.
    #[error("Event '{event}' has no transition from state '{state}'")]
    NoTransition { state: StateId, event: EventId },
}
