use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when interpreting task statuses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("invalid task status: {0:?}")]
    InvalidStatus(String),
}

//
// ─── STATUS ───────────────────────────────────────────────────────────────────
//

/// Lifecycle state of a single learning task.
///
/// A task that has never been written reads as `NotStarted`; the progress
/// store keeps no explicit entry for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// Task has not been begun.
    #[default]
    NotStarted,
    /// Task is currently being worked on.
    InProgress,
    /// Task is finished.
    Completed,
}

impl Status {
    /// All statuses, in selector order.
    pub const ALL: [Status; 3] = [Status::NotStarted, Status::InProgress, Status::Completed];

    /// Human-readable label, as shown in status selectors.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }

    /// Color token for this status. Presentation metadata only.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Status::NotStarted => "#E8E8E8",
            Status::InProgress => "#FFA500",
            Status::Completed => "#4CAF50",
        }
    }

    /// Glyph token for this status. Presentation metadata only.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Status::NotStarted => "⚪",
            Status::InProgress => "🟡",
            Status::Completed => "✅",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = StatusError;

    /// Parses an exact status label.
    ///
    /// This is the boundary where a host hands over a status as text; past
    /// it, out-of-range values are unrepresentable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(Status::NotStarted),
            "In Progress" => Ok(Status::InProgress),
            "Completed" => Ok(Status::Completed),
            other => Err(StatusError::InvalidStatus(other.to_string())),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
