//! Named predicates with violation messages.
//!
//! A rule is a pure boolean function over a [`Context`] plus the message
//! reported when it does not hold. Rules never see raw call parameters or
//! persistent state, only the context a builder already resolved.

use super::context::Context;
use std::fmt;
use std::sync::Arc;

/// Shared predicate function.
pub type Predicate = Arc<dyn Fn(&Context) -> bool + Send + Sync>;

/// Pure predicate that must hold for a guarded operation to run.
///
/// Predicates must be deterministic, free of side effects, and total: a
/// missing or mistyped key is a failing check, never a panic. A predicate
/// that does panic is a defect in the rule definition and the panic is
/// allowed to propagate out of validation.
///
/// # Example
///
/// ```rust
/// use rulegate::core::{Context, Rule};
///
/// let max_guests = Rule::new(
///     "max_guests",
///     |ctx: &Context| ctx.integer("guests").is_some_and(|g| g <= 10),
///     "Maximum 10 guests per booking",
/// );
///
/// assert!(max_guests.check(&Context::new().with("guests", 4i64)));
/// assert!(!max_guests.check(&Context::new().with("guests", 15i64)));
/// assert!(!max_guests.check(&Context::new()));
/// ```
#[derive(Clone)]
pub struct Rule {
    name: String,
    predicate: Predicate,
    message: String,
}

impl Rule {
    pub fn new<F>(name: impl Into<String>, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Context) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Evaluate the predicate against a context.
    pub fn check(&self, context: &Context) -> bool {
        (self.predicate)(context)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Free-function form of [`Rule::new`].
pub fn define_rule<F>(name: impl Into<String>, predicate: F, message: impl Into<String>) -> Rule
where
    F: Fn(&Context) -> bool + Send + Sync + 'static,
{
    Rule::new(name, predicate, message)
}
