//! Rewind: a minimal finite state machine with undo/redo history
//!
//! A machine is described declaratively: an initial state and, for every
//! state, the events that lead out of it. The engine tracks the current
//! state, records every state it enters and can step back and forth along
//! that record.
//!
//! # Core Concepts
//!
//! - **Config**: Initial state plus declared states and their transitions
//! - **Fsm**: The engine, owning the config, current state, history and redo slot
//! - **History**: Ordered log of visited states, never empty
//!
//! Undo/redo is deliberately asymmetric: only the most recently undone state
//! is remembered, and `reset` does not touch history. See [`Fsm`] for the
//! exact rules.
//!
//! # Example
//!
//! ```rust
//! use rewind::{Fsm, FsmError};
//!
//! let mut fsm = Fsm::from_json(r#"{
//!     "initial": "idle",
//!     "states": {
//!         "idle": { "transitions": { "start": "running" } },
//!         "running": { "transitions": { "stop": "idle" } }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(fsm.current_state(), "idle");
//!
//! fsm.trigger("start").unwrap();
//! assert_eq!(fsm.current_state(), "running");
//!
//! assert!(matches!(fsm.trigger("start"), Err(FsmError::NoTransition { .. })));
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.current_state(), "idle");
//! assert_eq!(fsm.states(Some("start")), vec!["idle"]);
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use crate::core::{Config, EventId, History, HistoryEntry, StateDefinition, StateId};
pub use error::FsmError;
pub use machine::Fsm;
