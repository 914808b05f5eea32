//! Travel booking tools guarded by symbolic business rules.
//!
//! The tools in [`tools`] are deliberately free of validation. The rule
//! catalog in [`rules`], the context builders in [`context`] and the
//! [`TravelDesk`] host together decide whether a call the agent makes is
//! allowed to reach them.

pub mod clock;
pub mod context;
pub mod desk;
pub mod operation;
pub mod policy;
pub mod rules;
pub mod store;
pub mod tools;

pub use clock::{Clock, FixedClock, SystemClock};
pub use desk::{booking_gate, DeskState, TravelDesk};
pub use operation::Operation;
pub use policy::BookingPolicy;
pub use store::{Booking, BookingLookup, BookingStore};
pub use tools::ToolError;
