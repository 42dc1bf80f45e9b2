//! Errors raised while building a configuration.

use thiserror::Error;

/// Errors that can occur when building a [`Config`](crate::Config) with
/// [`ConfigBuilder`](super::ConfigBuilder).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state or transition")]
    NoStates,

    #[error("Transition on '{event}' leaves undeclared state '{from}'. Call .state(\"{from}\") first")]
    UndeclaredSource { from: String, event: String },
}
