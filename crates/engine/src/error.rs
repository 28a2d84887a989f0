// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lumen_tags_domain::{DomainError, Tag};
use lumen_tags_store::StoreError;
use thiserror::Error;

/// Errors the migration engine can return.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A migration already exists for the requested source tag.
    #[error("A migration already exists for source tag '{source}' (currently targeting '{target}')")]
    MigrationAlreadyExists { r#source: Tag, target: Tag },

    /// The request was cancelled before the named step began.
    #[error("Migration cancelled before {phase}")]
    Cancelled { phase: &'static str },

    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    Domain(#[from] DomainError),

    /// A storage operation failed.
    #[error("Storage failure: {0}")]
    Store(#[from] StoreError),
}
