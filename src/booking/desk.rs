//! Host that routes agent tool calls through the booking gate.

use super::clock::{Clock, SystemClock};
use super::context::build_context;
use super::operation::Operation;
use super::policy::BookingPolicy;
use super::rules::rules_for;
use super::store::BookingStore;
use super::tools::{self, ToolError};
use crate::enforcement::ConfigurationError;
use crate::gate::{Decision, Gate, GuardedOperation, ToolCall};
use chrono::NaiveDateTime;

/// Environment the booking gate's context builders read from.
pub struct DeskState {
    store: BookingStore,
    clock: Box<dyn Clock>,
}

impl DeskState {
    pub fn new(store: BookingStore, clock: impl Clock + 'static) -> Self {
        Self {
            store,
            clock: Box::new(clock),
        }
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }
}

/// Build the gate guarding every operation that has rules under `policy`.
pub fn booking_gate(policy: &BookingPolicy) -> Result<Gate<DeskState>, ConfigurationError> {
    Operation::ALL
        .into_iter()
        .filter_map(|operation| rules_for(operation, policy).map(|rules| (operation, rules)))
        .fold(Gate::builder(), |builder, (operation, rules)| {
            builder.guard(
                GuardedOperation::new(operation.as_str(), rules, move |params, state: &DeskState| {
                    build_context(operation.as_str(), params, state.store(), state.now())
                })
                .strategy(policy.strategy),
            )
        })
        .build()
}

/// Travel booking tools behind a rule gate.
///
/// # Example
///
/// ```rust
/// use rulegate::booking::{BookingPolicy, BookingStore, FixedClock, TravelDesk};
/// use rulegate::gate::ToolCall;
/// use chrono::NaiveDate;
/// use serde_json::json;
///
/// let now = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let mut desk = TravelDesk::new(BookingPolicy::default(), BookingStore::new(), FixedClock(now)).unwrap();
///
/// let reply = desk.respond(&ToolCall::new(
///     "book_hotel",
///     json!({ "hotel": "Grand Hotel", "check_in": "2026-03-20", "check_out": "2026-03-25", "guests": 15 }),
/// ));
/// assert_eq!(reply, "BLOCKED: Maximum 10 guests per booking");
/// ```
pub struct TravelDesk {
    gate: Gate<DeskState>,
    state: DeskState,
}

impl TravelDesk {
    pub fn new(
        policy: BookingPolicy,
        store: BookingStore,
        clock: impl Clock + 'static,
    ) -> Result<Self, ConfigurationError> {
        let policy = policy.validated()?;
        Self::with_gate(booking_gate(&policy)?, DeskState::new(store, clock))
    }

    pub fn with_system_clock(policy: BookingPolicy, store: BookingStore) -> Result<Self, ConfigurationError> {
        Self::new(policy, store, SystemClock)
    }

    /// Use a custom gate.
    /// Every guarded operation must be one of the desk's tools.
    pub fn with_gate(gate: Gate<DeskState>, state: DeskState) -> Result<Self, ConfigurationError> {
        if let Some(unknown) = gate
            .guarded_operations()
            .find(|name| name.parse::<Operation>().is_err())
        {
            return Err(ConfigurationError::UnknownOperation {
                operation: unknown.to_string(),
            });
        }
        Ok(Self { gate, state })
    }

    /// Screen and, if allowed, run a tool call.
    pub fn call(&mut self, call: &ToolCall) -> Result<Decision<String>, ToolError> {
        let operation: Operation = call.name.parse()?;

        let interception = self.gate.execute(call, &mut self.state, |state, params| {
            tools::run(operation, &mut state.store, params)
        });

        match interception.decision {
            Decision::Allowed(result) => {
                let output = result?;
                tracing::info!(operation = %operation, %output, "Tool call executed");
                Ok(Decision::Allowed(output))
            }
            Decision::Blocked(rejection) => Ok(Decision::Blocked(rejection)),
        }
    }

    /// String-in, string-out adapter for an agent runtime.
    ///
    /// Tool failures are rendered as `ERROR: ...`, rejections as `BLOCKED: ...`.
    pub fn respond(&mut self, call: &ToolCall) -> String {
        match self.call(call) {
            Ok(decision) => decision.into_output(),
            Err(err) => {
                tracing::warn!(operation = %call.name, error = %err, "Tool call failed");
                format!("ERROR: {err}")
            }
        }
    }

    pub fn gate(&self) -> &Gate<DeskState> {
        &self.gate
    }

    pub fn state(&self) -> &DeskState {
        &self.state
    }

    pub fn store(&self) -> &BookingStore {
        self.state.store()
    }
}
