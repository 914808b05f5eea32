//! Business limits the booking rules are derived from.

use crate::enforcement::{ConfigurationError, ViolationStrategy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable booking constraints.
///
/// Every field has a default, so an empty JSON object is a valid policy:
///
/// ```rust
/// use rulegate::booking::BookingPolicy;
///
/// let policy = BookingPolicy::from_json_str(r#"{ "max_guests": 6 }"#).unwrap();
/// assert_eq!(policy.max_guests, 6);
/// assert_eq!(policy.min_advance_days, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingPolicy {
    /// Largest party a single booking may hold
    pub max_guests: i64,

    /// Minimum whole days between now and check-in when booking
    pub min_advance_days: i64,

    /// Minimum whole days between now and check-in when cancelling
    pub cancellation_window_days: i64,

    /// Applied to every guarded operation
    pub strategy: ViolationStrategy,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            max_guests: 10,
            min_advance_days: 1,
            cancellation_window_days: 2,
            strategy: ViolationStrategy::Block,
        }
    }
}

impl BookingPolicy {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        let policy: Self = serde_json::from_str(raw)?;
        policy.validated()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Reject limits no booking could ever satisfy or that make no sense.
    pub fn validated(self) -> Result<Self, ConfigurationError> {
        if self.max_guests < 1 {
            return Err(ConfigurationError::InvalidPolicy(format!(
                "max_guests must be at least 1, got {}",
                self.max_guests
            )));
        }
        if self.min_advance_days < 0 {
            return Err(ConfigurationError::InvalidPolicy(format!(
                "min_advance_days must not be negative, got {}",
                self.min_advance_days
            )));
        }
        if self.cancellation_window_days < 0 {
            return Err(ConfigurationError::InvalidPolicy(format!(
                "cancellation_window_days must not be negative, got {}",
                self.cancellation_window_days
            )));
        }
        Ok(self)
    }

    pub fn cancellation_window_hours(&self) -> i64 {
        self.cancellation_window_days * 24
    }
}
