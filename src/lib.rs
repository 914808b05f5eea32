//! Rulegate: a rule-based validation gate for agent tool calls
//!
//! Rulegate keeps business constraints out of tool implementations. Each
//! guarded operation gets an ordered set of pure rules; before the
//! operation runs, a context builder derives the facts those rules need and
//! the validator collects every violated rule. A call that fails is never
//! executed and its result is replaced with `BLOCKED: <reasons>`.
//!
//! # Core Concepts
//!
//! - **Context**: immutable per-call facts derived from raw parameters
//! - **Rule**: a named pure predicate plus its violation message
//! - **RuleSet**: ordered rules guarding one operation, validated with
//!   Stillwater's `Validation` so all violations surface at once
//! - **Gate**: the interception point, keyed by operation name
//!
//! # Example
//!
//! ```rust
//! use rulegate::booking::{BookingPolicy, BookingStore, FixedClock, TravelDesk};
//! use rulegate::gate::{Rejection, ToolCall};
//! use chrono::NaiveDate;
//! use serde_json::json;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let mut desk = TravelDesk::new(BookingPolicy::default(), BookingStore::new(), FixedClock(now)).unwrap();
//!
//! let reply = desk.respond(&ToolCall::new("confirm_booking", json!({ "booking_id": "BK001" })));
//! assert!(Rejection::is_rejection(&reply));
//! assert_eq!(reply, "BLOCKED: Payment must be verified before confirmation");
//! ```

pub mod booking;
pub mod core;
pub mod enforcement;
pub mod gate;

// Re-export commonly used types
pub use crate::core::{define_rule, Context, Rule, Value, Verdict};
pub use enforcement::{validate, ConfigurationError, RuleSet, RuleSetBuilder, ViolationStrategy};
pub use gate::{Decision, Gate, Rejection, ToolCall};
