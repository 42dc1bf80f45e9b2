//! The state machine engine.
//!
//! [`Fsm`] owns its [`Config`], the current state, the [`History`] of visited
//! states and a single redo slot. Every operation is synchronous and either
//! fully applies or leaves the machine untouched.

use crate::core::{Config, EventId, History, StateId};
use crate::error::FsmError;
use tracing::{debug, trace, warn};

/// Finite state machine with linear history and single-step redo.
///
/// # Undo and redo
///
/// `undo` pops the newest history entry into the redo slot and moves to the
/// entry below it. `redo` re-enters whatever the slot holds and appends it to
/// history again. The slot is only ever overwritten by the next `undo`; no
/// other operation clears it, so calling `redo` repeatedly keeps re-appending
/// the same state.
///
/// # Reset
///
/// `reset` moves back to the initial state but leaves history as it was.
/// A following `undo` therefore steps back along the pre-reset path, not to a
/// neighbour of the initial state. Use [`Fsm::clear_history`] to truncate
/// history as well.
///
/// # Example
///
/// ```rust
/// use rewind::{fsm_config, Fsm};
///
/// let mut fsm = Fsm::new(fsm_config! {
///     initial: idle,
///     idle { start => running },
///     running { stop => idle },
/// }).unwrap();
///
/// fsm.trigger("start").unwrap();
/// fsm.trigger("stop").unwrap();
/// assert_eq!(fsm.history().path(), vec!["idle", "running", "idle"]);
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.current_state(), "running");
///
/// assert!(fsm.redo());
/// assert_eq!(fsm.current_state(), "idle");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: Config,
    current: StateId,
    history: History,
    undone: Option<StateId>,
}

impl Fsm {
    /// Create a machine in the configured initial state.
    ///
    /// Only an empty configuration is rejected. An `initial` that is not a
    /// declared state, or transitions pointing at undeclared states, are
    /// accepted as-is.
    pub fn new(config: Config) -> Result<Self, FsmError> {
        if config.is_empty() {
            return Err(FsmError::InvalidConfig {
                reason: "configuration is empty".to_string(),
            });
        }

        if !config.contains(config.initial.as_str()) {
            warn!(initial = %config.initial, "initial state is not a declared state");
        }

        let current = config.initial.clone();
        let history = History::new(current.clone());
        debug!(initial = %current, states = config.states.len(), "state machine created");

        Ok(Self {
            config,
            current,
            history,
            undone: None,
        })
    }

    /// Create a machine from a JSON configuration. `null` is rejected.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        Self::new(Config::from_json(json)?)
    }

    /// Current state.
    pub fn current_state(&self) -> &StateId {
        &self.current
    }

    /// Configured initial state.
    pub fn initial_state(&self) -> &StateId {
        &self.config.initial
    }

    /// Configuration this machine was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Visited states, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Jump to `target` regardless of transition rules.
    ///
    /// The redo slot is left as it is.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        let Some((declared, _)) = self.config.states.get_key_value(target) else {
            return Err(FsmError::UnknownState {
                state: StateId::from(target),
            });
        };

        let declared = declared.clone();
        debug!(from = %self.current, to = %declared, "state changed");
        self.enter(declared);
        Ok(())
    }

    /// Fire `event` from the current state and return the new state.
    ///
    /// Fails when the current state declares no non-empty target for the
    /// event. That includes a current state that is not declared at all.
    pub fn trigger(&mut self, event: &str) -> Result<&StateId, FsmError> {
        let Some(target) = self.config.target(self.current.as_str(), event) else {
            return Err(FsmError::NoTransition {
                state: self.current.clone(),
                event: EventId::from(event),
            });
        };

        debug!(from = %self.current, to = %target, event, "transition fired");
        let target = target.clone();
        self.enter(target);
        Ok(&self.current)
    }

    /// Return to the initial state. History and the redo slot are untouched.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.config.initial, "state reset");
        self.current = self.config.initial.clone();
    }

    /// List declared states in declaration order.
    ///
    /// With a non-empty `event`, only states that declare a non-empty target
    /// for it are returned. An empty event name lists every state, like `None`.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateId> {
        match event {
            Some(event) if !event.is_empty() => self
                .config
                .states
                .iter()
                .filter(|(_, definition)| definition.target(event).is_some())
                .map(|(name, _)| name)
                .collect(),
            _ => self.config.states.keys().collect(),
        }
    }

    /// Events that can fire from the current state, in declaration order.
    pub fn events(&self) -> Vec<&EventId> {
        self.config
            .state(self.current.as_str())
            .map(|definition| {
                definition
                    .transitions
                    .iter()
                    .filter(|(_, target)| !target.is_empty())
                    .map(|(event, _)| event)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// True when nothing can fire from the current state.
    pub fn is_sink(&self) -> bool {
        self.config
            .state(self.current.as_str())
            .is_none_or(|definition| definition.is_sink())
    }

    /// True when `undo` would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.len() > 1
    }

    /// True when `redo` would succeed.
    pub fn can_redo(&self) -> bool {
        self.undone.as_ref().is_some_and(|state| !state.is_empty())
    }

    /// Step back to the previous history entry.
    ///
    /// Returns `false` and changes nothing when history holds a single entry.
    pub fn undo(&mut self) -> bool {
        let Some(popped) = self.history.pop() else {
            trace!(state = %self.current, "nothing to undo");
            return false;
        };

        self.current = self.history.last().clone();
        debug!(undone = %popped, to = %self.current, "undo");
        self.undone = Some(popped);
        true
    }

    /// Re-enter the most recently undone state.
    ///
    /// The slot is not cleared, so repeated calls re-append the same state.
    /// Returns `false` when nothing has been undone yet, or when the undone
    /// state has an empty name.
    pub fn redo(&mut self) -> bool {
        let Some(state) = self.undone.clone().filter(|state| !state.is_empty()) else {
            trace!(state = %self.current, "nothing to redo");
            return false;
        };

        debug!(from = %self.current, to = %state, "redo");
        self.enter(state);
        true
    }

    /// Truncate history to the initial state alone.
    ///
    /// The current state and the redo slot are left as they are.
    pub fn clear_history(&mut self) {
        debug!(dropped = self.history.len(), "history cleared");
        self.history.reseed(self.config.initial.clone());
    }

    fn enter(&mut self, state: StateId) {
        self.current = state.clone();
        self.history.push(state);
    }
}
