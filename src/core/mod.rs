//! Pure data model of the validation gate.
//!
//! - [`Value`] and [`Context`]: per-call facts derived from parameters
//! - [`Rule`]: a named predicate over a context with a violation message
//! - [`Verdict`]: the result of checking a set of rules
//!
//! Nothing in this module performs I/O or touches shared state.

mod context;
mod rule;
mod value;
mod verdict;

pub use context::Context;
pub use rule::{define_rule, Predicate, Rule};
pub use value::Value;
pub use verdict::Verdict;
