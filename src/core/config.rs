//! Declarative machine configuration.
//!
//! A [`Config`] names the initial state and maps every declared state to its
//! [`StateDefinition`]. Maps are insertion ordered, so declaration order is
//! what [`Fsm::states`](crate::Fsm::states) reports.

use super::id::{EventId, StateId};
use crate::builder::ConfigBuilder;
use crate::error::FsmError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Transitions available from one state.
///
/// A definition with no transitions is a sink state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event name to target state.
    #[serde(default)]
    pub transitions: IndexMap<EventId, StateId>,
}

impl StateDefinition {
    /// Create a definition with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target for `event`. An empty target counts as no transition.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions.get(event).filter(|target| !target.is_empty())
    }

    /// True when no event leads anywhere from this state.
    pub fn is_sink(&self) -> bool {
        self.transitions.values().all(StateId::is_empty)
    }
}

/// Initial state plus the declared states.
///
/// # Example
///
/// ```rust
/// use rewind::Config;
///
/// let config = Config::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle": { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert!(config.contains("running"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// State the machine starts in and returns to on reset.
    #[serde(default)]
    pub initial: StateId,
    /// Declared states, in declaration order.
    #[serde(default)]
    pub states: IndexMap<StateId, StateDefinition>,
}

impl Config {
    /// Create a configuration with no states declared yet.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Start a fluent builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Declare a state, returning the updated configuration.
    pub fn with_state(mut self, name: impl Into<StateId>, definition: StateDefinition) -> Self {
        self.states.insert(name.into(), definition);
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// A JSON `null` is an absent configuration and is rejected, as is an
    /// empty one.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let config: Option<Config> =
            serde_json::from_str(json).map_err(|e| FsmError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.ok_or_else(Self::absent)
    }

    /// Convert an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, FsmError> {
        if value.is_null() {
            return Err(Self::absent());
        }
        serde_json::from_value(value).map_err(|e| FsmError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Serialize back to JSON, preserving declaration order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// True when nothing at all was configured.
    pub fn is_empty(&self) -> bool {
        self.initial.is_empty() && self.states.is_empty()
    }

    /// True when `state` is a declared state.
    pub fn contains(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Definition of a declared state.
    pub fn state(&self, state: &str) -> Option<&StateDefinition> {
        self.states.get(state)
    }

    /// Target of `event` from `state`, if one is declared and non-empty.
    pub fn target(&self, state: &str, event: &str) -> Option<&StateId> {
        self.state(state).and_then(|definition| definition.target(event))
    }

    fn absent() -> FsmError {
        FsmError::InvalidConfig {
            reason: "configuration is absent".to_string(),
        }
    }
}
