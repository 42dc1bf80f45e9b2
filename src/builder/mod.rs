//! Builder API for ergonomic configuration construction.
//!
//! Configurations can be parsed from JSON, assembled with
//! [`ConfigBuilder`], or written out with the [`fsm_config!`](crate::fsm_config)
//! macro. All three produce the same [`Config`](crate::Config).

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;
