//! Ordered rule sets and the validator, using Validation.

use crate::core::{Context, Rule, Verdict};
use crate::enforcement::violations::RuleViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Ordered rules guarding one operation.
/// Uses Validation to accumulate ALL violations.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    pub(crate) rules: Vec<Rule>,
}

impl RuleSet {
    /// Check every rule, accumulating ALL violations in declaration order.
    /// Returns Validation::Success(()) if all rules hold.
    pub fn enforce(&self, context: &Context) -> Validation<(), NonEmptyVec<RuleViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<RuleViolation>>> = self
            .rules
            .iter()
            .map(|rule| {
                if rule.check(context) {
                    Validation::success(())
                } else {
                    Validation::fail(RuleViolation {
                        rule: rule.name().to_string(),
                        message: rule.message().to_string(),
                    })
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Evaluate the rule set and flatten the result into a [`Verdict`].
    pub fn validate(&self, context: &Context) -> Verdict {
        match self.enforce(context) {
            Validation::Success(()) => Verdict::pass(),
            Validation::Failure(violations) => {
                Verdict::from_violations(violations.iter().map(|v| v.message.clone()).collect())
            }
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// Evaluate `rules` against `context`.
///
/// Deterministic and side-effect free: the same pair always yields the
/// same verdict.
pub fn validate(rules: &RuleSet, context: &Context) -> Verdict {
    rules.validate(context)
}
