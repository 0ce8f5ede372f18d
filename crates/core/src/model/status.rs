use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A user's progress marker against one topic.
///
/// The set is closed and unordered: any value may follow any other.
/// Fixture and storage both use the SCREAMING_SNAKE_CASE wire form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Done,
    Skip,
}

/// Error returned when a stored status string is not one of the four values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid status: {raw}")]
pub struct ParseStatusError {
    raw: String,
}

impl Status {
    /// Every status value, in display order.
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::InProgress,
        Status::Done,
        Status::Skip,
    ];

    /// Wire/storage representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::InProgress => "IN_PROGRESS",
            Status::Done => "DONE",
            Status::Skip => "SKIP",
        }
    }

    /// Human-readable label for controls.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In progress",
            Status::Done => "Done",
            Status::Skip => "Skip",
        }
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Status::Pending),
            "IN_PROGRESS" => Ok(Status::InProgress),
            "DONE" => Ok(Status::Done),
            "SKIP" => Ok(Status::Skip),
            other => Err(ParseStatusError {
                raw: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
