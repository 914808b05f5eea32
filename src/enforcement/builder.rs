//! Builder API for declaring rule sets.

use crate::core::{Context, Rule};
use crate::enforcement::rules::RuleSet;

/// Builder for an ordered [`RuleSet`].
///
/// Rules are evaluated and reported in the order they are added.
#[derive(Default)]
pub struct RuleSetBuilder {
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a predicate rule with its violation message
    pub fn rule<F>(mut self, name: impl Into<String>, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Context) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(name, predicate, message));
        self
    }

    /// Add an already defined rule
    pub fn push(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add several rules at once
    pub fn extend(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn build(self) -> RuleSet {
        RuleSet { rules: self.rules }
    }
}
