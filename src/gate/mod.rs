//! Interception point for guarded tool calls.
//!
//! A [`Gate`] sits between an agent runtime and the tools it calls. For each
//! call it looks up the operation's rule set, builds a context, validates it
//! and either lets the call proceed or replaces its result with a
//! [`Rejection`] of the form `BLOCKED: <message>, <message>`.
//!
//! Two gaps are handled differently on purpose:
//! - an operation with no registered rules is allowed without validation
//! - a guarded operation whose parameters cannot be resolved fails closed

mod call;
mod hook;
mod outcome;
mod phase;

pub use call::{Params, ToolCall};
pub use hook::{ContextBuilder, Gate, GateBuilder, GuardedOperation};
pub use outcome::{Clearance, Decision, Interception, Rejection, Screening, BLOCKED_PREFIX};
pub use phase::{CallPhase, CallTrail, PhaseChange};
