//! Validation-based enforcement of rule sets.
//!
//! Rule sets are checked with Stillwater's `Validation` type so that ALL
//! violations are collected instead of stopping at the first failing rule.
//! A caller that is told "too many guests" should also learn, in the same
//! pass, that its dates are backwards.
//!
//! # Example
//!
//! ```rust
//! use rulegate::core::Context;
//! use rulegate::enforcement::{validate, RuleSetBuilder};
//!
//! let rules = RuleSetBuilder::new()
//!     .rule(
//!         "max_guests",
//!         |ctx| ctx.integer("guests").is_some_and(|g| g <= 10),
//!         "Maximum 10 guests per booking",
//!     )
//!     .rule(
//!         "payment_verified",
//!         |ctx| ctx.flag("payment_verified").unwrap_or(false),
//!         "Payment must be verified before confirmation",
//!     )
//!     .build();
//!
//! let verdict = validate(&rules, &Context::new().with("guests", 15i64));
//! assert!(!verdict.passed());
//! assert_eq!(verdict.violations().len(), 2);
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::RuleSetBuilder;
pub use rules::{validate, RuleSet};
pub use violations::{ConfigurationError, RuleViolation, ViolationStrategy};
