//! Per-call facts that rule predicates read.

use super::value::Value;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable mapping of field name to [`Value`].
///
/// A context is assembled once by a context builder using the consuming
/// [`with`](Context::with) method and only read afterwards. The typed
/// accessors return `None` both for a missing key and for a key holding a
/// different variant (including `Null`), so predicates written as
/// `ctx.integer("guests").is_some_and(|g| g <= 10)` fail closed on bad data.
///
/// # Example
///
/// ```rust
/// use rulegate::core::Context;
///
/// let ctx = Context::new().with("guests", 4i64).with("booking_id", "BK001");
///
/// assert_eq!(ctx.integer("guests"), Some(4));
/// assert_eq!(ctx.text("booking_id"), Some("BK001"));
/// assert_eq!(ctx.integer("missing"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    fields: BTreeMap<String, Value>,
}

impl Context {
    /// Context with no fields. Every rule reading a key fails against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a context with `key` set to `value`, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Return a context with `key` explicitly set to `Null`.
    pub fn with_null(self, key: impl Into<String>) -> Self {
        self.with(key, Value::Null)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// True when the key exists and is not `Null`.
    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_null())
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_integer)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        self.get(key).and_then(Value::as_date)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
