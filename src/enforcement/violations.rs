//! Violation records, configuration errors, and handling strategies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single rule that did not hold for a context.
///
/// Display renders only the message, which is what ends up in a verdict
/// and in rejection text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct RuleViolation {
    pub rule: String,
    pub message: String,
}

/// Defects in how rules, gates, or policies were set up.
///
/// These are never produced by user data. They surface when a gate is
/// built or a policy is loaded and should stop the host process from
/// serving calls.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Operation '{operation}' is registered more than once")]
    DuplicateOperation { operation: String },

    #[error("Rules are registered for unknown operation '{operation}'")]
    UnknownOperation { operation: String },

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Failed to parse policy: {0}")]
    PolicyParse(#[from] serde_json::Error),

    #[error("Failed to read policy: {0}")]
    PolicyRead(#[from] std::io::Error),
}

/// What the gate does when a guarded call violates its rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationStrategy {
    /// Cancel the call and return a rejection
    #[default]
    Block,

    /// Let the call run but log every violation
    LogOnly,
}
