//! Outcome of evaluating one rule set against one context.

use serde::{Deserialize, Serialize};

/// Pass/fail result plus the messages of every violated rule.
///
/// `passed()` is true exactly when there are no violations; the two cannot
/// disagree because the flag is derived from the list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    violations: Vec<String>,
}

impl Verdict {
    pub fn pass() -> Self {
        Self::default()
    }

    /// Build a verdict from violation messages in rule declaration order.
    pub fn from_violations(violations: Vec<String>) -> Self {
        Self { violations }
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<String> {
        self.violations
    }
}
