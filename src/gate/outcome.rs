//! What the interception point reports back to its caller.

use super::phase::CallTrail;
use std::fmt;

/// Prefix that marks a tool result as a rejection.
pub const BLOCKED_PREFIX: &str = "BLOCKED: ";

/// A cancelled call and the reasons for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    violations: Vec<String>,
}

impl Rejection {
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    /// True if `output` is a rejection rendered by this gate.
    pub fn is_rejection(output: &str) -> bool {
        output.starts_with(BLOCKED_PREFIX)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{BLOCKED_PREFIX}{}", self.violations.join(", "))
    }
}

/// How a call fared at the gate, before anything ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Clearance {
    /// No rules are registered for the operation
    Unguarded,

    /// Every rule held
    Passed,

    /// Rules failed but the operation logs instead of blocking
    Waived(Vec<String>),

    /// Rules failed and the call must not run
    Blocked(Rejection),
}

/// Result of [`Gate::screen`](super::Gate::screen).
#[derive(Clone, Debug)]
pub struct Screening {
    pub clearance: Clearance,
    pub trail: CallTrail,
}

impl Screening {
    pub fn is_blocked(&self) -> bool {
        matches!(self.clearance, Clearance::Blocked(_))
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match &self.clearance {
            Clearance::Blocked(rejection) => Some(rejection),
            _ => None,
        }
    }

    /// The string a runtime should substitute for the tool result, if any.
    pub fn cancel_message(&self) -> Option<String> {
        self.rejection().map(ToString::to_string)
    }
}

/// Whether the real operation ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision<T> {
    Allowed(T),
    Blocked(Rejection),
}

impl<T> Decision<T> {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    pub fn allowed(self) -> Option<T> {
        match self {
            Self::Allowed(value) => Some(value),
            Self::Blocked(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decision<U> {
        match self {
            Self::Allowed(value) => Decision::Allowed(f(value)),
            Self::Blocked(rejection) => Decision::Blocked(rejection),
        }
    }
}

impl<T: fmt::Display> Decision<T> {
    /// Render as the single string a tool runtime expects.
    pub fn into_output(self) -> String {
        match self {
            Self::Allowed(value) => value.to_string(),
            Self::Blocked(rejection) => rejection.to_string(),
        }
    }
}

/// Result of [`Gate::execute`](super::Gate::execute).
#[derive(Clone, Debug)]
pub struct Interception<T> {
    pub decision: Decision<T>,
    pub trail: CallTrail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_joins_messages() {
        let rejection = Rejection::new(vec![
            "Cannot cancel within 48 hours of check-in".to_string(),
            "No booking found to cancel".to_string(),
        ]);
        assert_eq!(
            rejection.to_string(),
            "BLOCKED: Cannot cancel within 48 hours of check-in, No booking found to cancel"
        );
    }

    #[test]
    fn single_violation_format() {
        let rejection = Rejection::new(vec!["Maximum 10 guests per booking".to_string()]);
        assert_eq!(rejection.to_string(), "BLOCKED: Maximum 10 guests per booking");
        assert!(Rejection::is_rejection(&rejection.to_string()));
    }

    #[test]
    fn success_text_is_not_rejection() {
        assert!(!Rejection::is_rejection("SUCCESS: Confirmed BK001"));
        assert!(!Rejection::is_rejection("blocked: lowercase"));
    }

    #[test]
    fn decision_renders_output() {
        let allowed: Decision<String> = Decision::Allowed("SUCCESS: done".to_string());
        assert_eq!(allowed.into_output(), "SUCCESS: done");

        let blocked: Decision<String> = Decision::Blocked(Rejection::new(vec!["nope".into()]));
        assert!(!blocked.is_allowed());
        assert_eq!(blocked.into_output(), "BLOCKED: nope");
    }

    #[test]
    fn decision_map_keeps_rejection() {
        let blocked: Decision<i32> = Decision::Blocked(Rejection::new(vec!["x".into()]));
        assert_eq!(blocked.map(|n| n + 1), Decision::Blocked(Rejection::new(vec!["x".into()])));
        assert_eq!(Decision::Allowed(1).map(|n| n + 1).allowed(), Some(2));
    }
}
