//! The interception point: screen a call, then run it or reject it.

use super::call::{Params, ToolCall};
use super::outcome::{Clearance, Decision, Interception, Rejection, Screening};
use super::phase::{CallPhase, CallTrail};
use crate::core::Context;
use crate::enforcement::{ConfigurationError, RuleSet, ViolationStrategy};
use std::collections::HashMap;

/// Derives the context for one operation from its parameters and the
/// read-only environment (persistent state, clock).
pub type ContextBuilder<Env> = Box<dyn Fn(&Params, &Env) -> Context + Send + Sync>;

/// Rules, context builder and strategy registered for one operation.
pub struct GuardedOperation<Env> {
    operation: String,
    rules: RuleSet,
    build_context: ContextBuilder<Env>,
    strategy: ViolationStrategy,
}

impl<Env> GuardedOperation<Env> {
    pub fn new<F>(operation: impl Into<String>, rules: RuleSet, build_context: F) -> Self
    where
        F: Fn(&Params, &Env) -> Context + Send + Sync + 'static,
    {
        Self {
            operation: operation.into(),
            rules,
            build_context: Box::new(build_context),
            strategy: ViolationStrategy::Block,
        }
    }

    /// Set violation handling strategy
    pub fn strategy(mut self, strategy: ViolationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.strategy
    }
}

/// Pre-execution gate keyed by operation name.
///
/// Operations without registered rules pass through untouched. Guarded
/// operations have their context built and validated; on failure the real
/// operation never runs. The gate itself holds no per-call state and can be
/// shared across threads.
///
/// # Example
///
/// ```rust
/// use rulegate::core::Context;
/// use rulegate::enforcement::RuleSetBuilder;
/// use rulegate::gate::{Decision, Gate, GuardedOperation, ToolCall};
/// use serde_json::json;
///
/// let rules = RuleSetBuilder::new()
///     .rule(
///         "max_guests",
///         |ctx| ctx.integer("guests").is_some_and(|g| g <= 10),
///         "Maximum 10 guests per booking",
///     )
///     .build();
///
/// let gate: Gate<()> = Gate::builder()
///     .guard(GuardedOperation::new("book_hotel", rules, |params, _env: &()| {
///         let guests = params.get("guests").and_then(|v| v.as_i64());
///         Context::new().with("guests", guests)
///     }))
///     .build()
///     .unwrap();
///
/// let call = ToolCall::new("book_hotel", json!({ "guests": 15 }));
/// let result = gate.execute(&call, &mut (), |_, _| "SUCCESS: booked".to_string());
///
/// assert_eq!(
///     result.decision,
///     Decision::Blocked(rulegate::gate::Rejection::new(vec![
///         "Maximum 10 guests per booking".to_string()
///     ]))
/// );
/// ```
pub struct Gate<Env> {
    guards: HashMap<String, GuardedOperation<Env>>,
}

impl<Env> Gate<Env> {
    pub fn builder() -> GateBuilder<Env> {
        GateBuilder::new()
    }

    pub fn is_guarded(&self, operation: &str) -> bool {
        self.guards.contains_key(operation)
    }

    pub fn guarded_operations(&self) -> impl Iterator<Item = &str> {
        self.guards.keys().map(String::as_str)
    }

    pub fn rules_for(&self, operation: &str) -> Option<&RuleSet> {
        self.guards.get(operation).map(GuardedOperation::rules)
    }

    /// Run the context builder and validator for `call` without executing it.
    ///
    /// This is the hook an agent runtime calls before a tool runs; when the
    /// screening is blocked the runtime replaces the tool result with
    /// [`Screening::cancel_message`].
    pub fn screen(&self, call: &ToolCall, env: &Env) -> Screening {
        let trail = CallTrail::start(&call.name);

        let Some(guard) = self.guards.get(&call.name) else {
            tracing::debug!(operation = %call.name, "No rules registered, passing call through");
            return Screening {
                clearance: Clearance::Unguarded,
                trail: trail.advance(CallPhase::Allowed),
            };
        };

        let context = (guard.build_context)(&call.input, env);
        let verdict = guard.rules.validate(&context);
        let trail = trail.advance(CallPhase::Validated);

        if verdict.passed() {
            tracing::debug!(operation = %call.name, rules = guard.rules.len(), "Call passed validation");
            return Screening {
                clearance: Clearance::Passed,
                trail: trail.advance(CallPhase::Allowed),
            };
        }

        match guard.strategy {
            ViolationStrategy::Block => {
                tracing::warn!(
                    operation = %call.name,
                    violations = ?verdict.violations(),
                    "Blocked tool call"
                );
                Screening {
                    clearance: Clearance::Blocked(Rejection::new(verdict.into_violations())),
                    trail: trail.advance(CallPhase::Blocked),
                }
            }
            ViolationStrategy::LogOnly => {
                tracing::warn!(
                    operation = %call.name,
                    violations = ?verdict.violations(),
                    "Rule violations waived, call proceeds"
                );
                Screening {
                    clearance: Clearance::Waived(verdict.into_violations()),
                    trail: trail.advance(CallPhase::Allowed),
                }
            }
        }
    }

    /// Screen `call` and, unless it is blocked, run `operation`.
    ///
    /// The operation's result is returned unchanged. A blocked call never
    /// touches `env` mutably.
    pub fn execute<T, F>(&self, call: &ToolCall, env: &mut Env, operation: F) -> Interception<T>
    where
        F: FnOnce(&mut Env, &Params) -> T,
    {
        let Screening { clearance, trail } = self.screen(call, env);

        let decision = match clearance {
            Clearance::Blocked(rejection) => Decision::Blocked(rejection),
            Clearance::Unguarded | Clearance::Passed | Clearance::Waived(_) => {
                Decision::Allowed(operation(env, &call.input))
            }
        };

        Interception { decision, trail }
    }
}

/// Builder for a [`Gate`].
pub struct GateBuilder<Env> {
    guards: Vec<GuardedOperation<Env>>,
}

impl<Env> GateBuilder<Env> {
    pub fn new() -> Self {
        Self { guards: Vec::new() }
    }

    /// Register rules for one operation.
    pub fn guard(mut self, guard: GuardedOperation<Env>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Build the gate.
    /// Returns an error if an operation is registered twice.
    pub fn build(self) -> Result<Gate<Env>, ConfigurationError> {
        let mut guards = HashMap::with_capacity(self.guards.len());

        for guard in self.guards {
            if guards.contains_key(&guard.operation) {
                return Err(ConfigurationError::DuplicateOperation {
                    operation: guard.operation,
                });
            }
            guards.insert(guard.operation.clone(), guard);
        }

        Ok(Gate { guards })
    }
}

impl<Env> Default for GateBuilder<Env> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enforcement::RuleSetBuilder;
    use serde_json::json;

    #[derive(Default)]
    struct Ledger {
        paid: Vec<String>,
        confirmed: Vec<String>,
    }

    fn confirmation_gate(strategy: ViolationStrategy) -> Gate<Ledger> {
        let rules = RuleSetBuilder::new()
            .rule(
                "payment_before_confirm",
                |ctx| ctx.flag("payment_verified").unwrap_or(false),
                "Payment must be verified before confirmation",
            )
            .build();

        Gate::builder()
            .guard(
                GuardedOperation::new("confirm", rules, |params: &Params, ledger: &Ledger| {
                    let verified = params
                        .get("id")
                        .and_then(|v| v.as_str())
                        .is_some_and(|id| ledger.paid.iter().any(|p| p == id));
                    Context::new().with("payment_verified", verified)
                })
                .strategy(strategy),
            )
            .build()
            .unwrap()
    }

    fn confirm(ledger: &mut Ledger, params: &Params) -> String {
        let id = params.get("id").and_then(|v| v.as_str()).unwrap_or_default();
        ledger.confirmed.push(id.to_string());
        format!("SUCCESS: Confirmed {id}")
    }

    #[test]
    fn unguarded_operation_passes_through() {
        let gate = confirmation_gate(ViolationStrategy::Block);
        let mut ledger = Ledger::default();
        let call = ToolCall::new("lookup", json!({ "id": "BK001" }));

        let result = gate.execute(&call, &mut ledger, |_, _| 42);

        assert_eq!(result.decision, Decision::Allowed(42));
        assert_eq!(result.trail.path(), vec![CallPhase::Pending, CallPhase::Allowed]);
    }

    #[test]
    fn failed_rules_block_and_skip_operation() {
        let gate = confirmation_gate(ViolationStrategy::Block);
        let mut ledger = Ledger::default();
        let call = ToolCall::new("confirm", json!({ "id": "BK001" }));

        let result = gate.execute(&call, &mut ledger, confirm);

        assert_eq!(
            result.decision.into_output(),
            "BLOCKED: Payment must be verified before confirmation"
        );
        assert!(ledger.confirmed.is_empty());
        assert_eq!(
            result.trail.path(),
            vec![CallPhase::Pending, CallPhase::Validated, CallPhase::Blocked]
        );
    }

    #[test]
    fn passing_rules_run_operation() {
        let gate = confirmation_gate(ViolationStrategy::Block);
        let mut ledger = Ledger {
            paid: vec!["BK001".to_string()],
            ..Ledger::default()
        };
        let call = ToolCall::new("confirm", json!({ "id": "BK001" }));

        let result = gate.execute(&call, &mut ledger, confirm);

        assert_eq!(result.decision, Decision::Allowed("SUCCESS: Confirmed BK001".to_string()));
        assert_eq!(ledger.confirmed, vec!["BK001"]);
        assert_eq!(result.trail.current(), CallPhase::Allowed);
    }

    #[test]
    fn log_only_strategy_waives_violations() {
        let gate = confirmation_gate(ViolationStrategy::LogOnly);
        let ledger = Ledger::default();
        let call = ToolCall::new("confirm", json!({ "id": "BK009" }));

        let screening = gate.screen(&call, &ledger);

        assert_eq!(
            screening.clearance,
            Clearance::Waived(vec!["Payment must be verified before confirmation".to_string()])
        );
        assert!(!screening.is_blocked());
        assert_eq!(screening.cancel_message(), None);
    }

    #[test]
    fn screening_exposes_cancel_message() {
        let gate = confirmation_gate(ViolationStrategy::Block);
        let screening = gate.screen(&ToolCall::without_input("confirm"), &Ledger::default());

        assert!(screening.is_blocked());
        assert_eq!(
            screening.cancel_message().as_deref(),
            Some("BLOCKED: Payment must be verified before confirmation")
        );
    }

    #[test]
    fn duplicate_registration_is_configuration_error() {
        let result: Result<Gate<()>, _> = Gate::builder()
            .guard(GuardedOperation::new("book", RuleSet::default(), |_, _: &()| Context::new()))
            .guard(GuardedOperation::new("book", RuleSet::default(), |_, _: &()| Context::new()))
            .build();

        assert!(matches!(
            result,
            Err(ConfigurationError::DuplicateOperation { operation }) if operation == "book"
        ));
    }

    #[test]
    fn gate_reports_guarded_operations() {
        let gate = confirmation_gate(ViolationStrategy::Block);
        assert!(gate.is_guarded("confirm"));
        assert!(!gate.is_guarded("lookup"));
        assert_eq!(gate.guarded_operations().collect::<Vec<_>>(), vec!["confirm"]);
        assert_eq!(gate.rules_for("confirm").map(RuleSet::len), Some(1));
    }

    #[test]
    fn gate_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Gate<Ledger>>();
    }
}
