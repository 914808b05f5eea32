//! Identifiers for the travel desk's tool operations.

use super::tools::ToolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    BookHotel,
    ConfirmBooking,
    CancelBooking,
    ProcessPayment,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Self::BookHotel,
        Self::ConfirmBooking,
        Self::CancelBooking,
        Self::ProcessPayment,
    ];

    /// Tool name as seen by the agent runtime.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BookHotel => "book_hotel",
            Self::ConfirmBooking => "confirm_booking",
            Self::CancelBooking => "cancel_booking",
            Self::ProcessPayment => "process_payment",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "delete_everything".parse::<Operation>().unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(name) if name == "delete_everything"));
    }

    #[test]
    fn display_uses_tool_name() {
        assert_eq!(Operation::CancelBooking.to_string(), "cancel_booking");
    }
}
