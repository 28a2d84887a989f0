// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the processing status of a post.
///
/// Posts enter the system as `Pending`, move to `Processing` while their
/// media is being prepared, and finish in one of the terminal states.
/// Transition rules are enforced at command time only; replaying recorded
/// status events never re-checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// Initial state after creation. Awaiting processing.
    #[default]
    Pending,
    /// Media preparation in progress.
    Processing,
    /// Processing finished successfully. Terminal.
    Completed,
    /// Processing failed. Terminal.
    Failed,
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PostStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - The status string (e.g. "pending", "completed")
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the string does not name a
    /// known status.
    pub fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }

    /// Returns whether this status is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Processing
    /// - Processing → Completed
    /// - Processing → Failed
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Processing)
                | (Self::Processing, Self::Completed)
                | (Self::Processing, Self::Failed)
        )
    }

    /// Validates a requested transition from this status to another.
    ///
    /// # Arguments
    ///
    /// * `new_status` - The requested target status
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if this status is
    /// terminal or the requested transition is not one of the valid moves.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: String::from("status is terminal"),
            });
        }
        if self.can_transition_to(new_status) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: String::from("transition is not permitted"),
            })
        }
    }
}
