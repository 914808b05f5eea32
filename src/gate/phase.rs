//! Lifecycle of a single intercepted call.
//!
//! Every call starts `Pending`. A guarded call moves to `Validated` once its
//! verdict exists and then ends `Allowed` or `Blocked`. An operation with no
//! registered rules goes straight from `Pending` to `Allowed`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallPhase {
    Pending,
    Validated,
    Allowed,
    Blocked,
}

impl CallPhase {
    pub fn name(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Validated => "Validated",
            Self::Allowed => "Allowed",
            Self::Blocked => "Blocked",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Allowed | Self::Blocked)
    }

    /// Pure transition table. There are no retries and terminal phases
    /// have no successors.
    pub fn can_advance_to(&self, next: CallPhase) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Validated)
                | (Self::Pending, Self::Allowed)
                | (Self::Validated, Self::Allowed)
                | (Self::Validated, Self::Blocked)
        )
    }
}

/// One recorded phase change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseChange {
    pub from: CallPhase,
    pub to: CallPhase,
    pub timestamp: DateTime<Utc>,
}

/// Immutable record of the phases a call went through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallTrail {
    operation: String,
    changes: Vec<PhaseChange>,
}

impl CallTrail {
    pub fn start(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            changes: Vec::new(),
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn current(&self) -> CallPhase {
        self.changes.last().map_or(CallPhase::Pending, |c| c.to)
    }

    /// Record a move to `next`, returning a new trail.
    pub fn advance(&self, next: CallPhase) -> Self {
        let from = self.current();
        debug_assert!(
            from.can_advance_to(next),
            "illegal call phase change {} -> {}",
            from.name(),
            next.name()
        );

        let mut changes = self.changes.clone();
        changes.push(PhaseChange {
            from,
            to: next,
            timestamp: Utc::now(),
        });
        Self {
            operation: self.operation.clone(),
            changes,
        }
    }

    /// Every phase visited, starting with `Pending`.
    pub fn path(&self) -> Vec<CallPhase> {
        std::iter::once(CallPhase::Pending)
            .chain(self.changes.iter().map(|c| c.to))
            .collect()
    }

    pub fn changes(&self) -> &[PhaseChange] {
        &self.changes
    }

    pub fn is_finished(&self) -> bool {
        self.current().is_terminal()
    }
}
