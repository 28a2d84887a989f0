// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lumen_tags_domain::Tag;

/// Errors that can occur in a storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend failed to execute an operation.
    Backend(String),
    /// An event payload could not be serialized or deserialized.
    Serialization(String),
    /// A migration record scheduled for deletion was not found.
    MigrationNotFound {
        /// The source tag of the missing record.
        source: Tag,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(message) => write!(f, "Storage backend error: {message}"),
            Self::Serialization(message) => {
                write!(f, "Event serialization error: {message}")
            }
            Self::MigrationNotFound { source } => {
                write!(f, "No migration record found for source tag '{source}'")
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
