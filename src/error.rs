//! Crate error type.
//!
//! Every failure the crate can raise is an input-precondition violation:
//! a malformed ordering, a bad duration, an empty agent pool, or an invalid
//! optimizer configuration.

use thiserror::Error;

/// Errors raised by simulation, optimization, and allocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpenShopError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("agent count must be at least 1")]
    NoAgents,

    #[error("duration of resource {index} must be finite and non-negative, got {value}")]
    InvalidDuration { index: usize, value: f64 },

    #[error("task {index} duration must be finite and positive, got {value}")]
    NonPositiveDuration { index: usize, value: f64 },

    #[error("agent {agent} order has {found} entries, expected {expected}")]
    OrderLength {
        agent: usize,
        expected: usize,
        found: usize,
    },

    #[error("agent {agent} references resource {resource}, but only {resources} exist")]
    ResourceOutOfRange {
        agent: usize,
        resource: usize,
        resources: usize,
    },

    #[error("agent {agent} visits resource {resource} more than once")]
    DuplicateResource { agent: usize, resource: usize },
}

/// Shorthand result type for this crate.
pub type Result<T> = std::result::Result<T, OpenShopError>;
