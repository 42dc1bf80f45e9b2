//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::core::{Config, EventId, StateDefinition, StateId};

/// Builder for constructing a [`Config`] with a fluent API.
///
/// States are declared in call order, which is the order
/// [`Fsm::states`](crate::Fsm::states) later reports. Transition targets are
/// not checked against the declared states.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: Vec<StateId>,
    transitions: Vec<(StateId, EventId, StateId)>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring the same state twice keeps its first position.
    pub fn state(mut self, name: impl Into<StateId>) -> Self {
        let name = name.into();
        if !self.states.contains(&name) {
            self.states.push(name);
        }
        self
    }

    /// Declare several states at once.
    pub fn states<I, T>(self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StateId>,
    {
        names.into_iter().fold(self, |builder, name| builder.state(name))
    }

    /// Add a transition from a declared state.
    /// A later transition for the same state and event replaces the earlier one.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        self.transitions.push((from.into(), event.into(), to.into()));
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing or a transition
    /// leaves a state that was never declared.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut config = Config::new(initial);
        for name in self.states {
            config.states.insert(name, StateDefinition::new());
        }

        for (from, event, to) in self.transitions {
            let Some(definition) = config.states.get_mut(from.as_str()) else {
                return Err(BuildError::UndeclaredSource {
                    from: from.to_string(),
                    event: event.to_string(),
                });
            };
            definition.transitions.insert(event, to);
        }

        Ok(config)
    }
}
