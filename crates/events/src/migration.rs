// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::payload::EventPayload;
use lumen_tags_domain::{DomainError, Tag, UserId, validate_user_id};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A persisted mapping from one tag to another.
///
/// Migration records live in the document store, independent of any event
/// stream, and are the lookup table behind tag resolution. At most one
/// record may exist per source tag at a time; the orchestrator enforces
/// this by lookup-before-create. Records are never mutated in place —
/// chain repair replaces them wholesale (delete + insert).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationRecord {
    /// The numeric identifier assigned by the document store.
    /// `None` indicates the record has not been persisted yet.
    migration_id: Option<i64>,
    /// The tag being retired.
    source_tag: Tag,
    /// The tag replacing it.
    target_tag: Tag,
    /// The user who requested the migration.
    created_by: UserId,
    /// When the record was created (UTC).
    created_at: OffsetDateTime,
    /// When the record was last written (UTC). Equal to `created_at` for
    /// records that have never been replaced.
    last_modified: OffsetDateTime,
}

// Custom PartialEq and Hash that ignore migration_id and timestamps.
// Two records are equal if they describe the same mapping requested by
// the same user, regardless of which rows carry them.
impl PartialEq for MigrationRecord {
    fn eq(&self, other: &Self) -> bool {
        self.source_tag == other.source_tag
            && self.target_tag == other.target_tag
            && self.created_by == other.created_by
    }
}

impl Eq for MigrationRecord {}

impl std::hash::Hash for MigrationRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.source_tag.hash(state);
        self.target_tag.hash(state);
        self.created_by.hash(state);
    }
}

impl MigrationRecord {
    /// Creates a new, unpersisted `MigrationRecord`.
    ///
    /// Both timestamps are set to the current time. The factory does not
    /// reject `source == target` — that check belongs to the migration
    /// orchestrator, which rejects it before touching any store.
    ///
    /// # Arguments
    ///
    /// * `created_by` - The user requesting the migration
    /// * `source_tag` - The tag being retired
    /// * `target_tag` - The tag replacing it
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyUserId` if `created_by` is blank.
    pub fn new(
        created_by: UserId,
        source_tag: Tag,
        target_tag: Tag,
    ) -> Result<Self, DomainError> {
        validate_user_id(&created_by)?;
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        Ok(Self {
            migration_id: None,
            source_tag,
            target_tag,
            created_by,
            created_at: now,
            last_modified: now,
        })
    }

    /// Rehydrates a `MigrationRecord` from storage.
    ///
    /// No validation is performed: storage is trusted to return what was
    /// written, and legacy rows with malformed attribution must still be
    /// representable so chain repair can inspect and skip them.
    ///
    /// # Arguments
    ///
    /// * `migration_id` - The store-assigned numeric identifier
    /// * `created_by` - The user who requested the migration
    /// * `source_tag` - The tag being retired
    /// * `target_tag` - The tag replacing it
    /// * `created_at` - When the record was created
    /// * `last_modified` - When the record was last written
    #[must_use]
    pub const fn with_id(
        migration_id: i64,
        created_by: UserId,
        source_tag: Tag,
        target_tag: Tag,
        created_at: OffsetDateTime,
        last_modified: OffsetDateTime,
    ) -> Self {
        Self {
            migration_id: Some(migration_id),
            source_tag,
            target_tag,
            created_by,
            created_at,
            last_modified,
        }
    }

    /// Returns the store-assigned identifier if persisted.
    #[must_use]
    pub const fn migration_id(&self) -> Option<i64> {
        self.migration_id
    }

    /// Returns the tag being retired.
    #[must_use]
    pub const fn source_tag(&self) -> &Tag {
        &self.source_tag
    }

    /// Returns the tag replacing the source.
    #[must_use]
    pub const fn target_tag(&self) -> &Tag {
        &self.target_tag
    }

    /// Returns the user who requested the migration.
    #[must_use]
    pub const fn created_by(&self) -> &UserId {
        &self.created_by
    }

    /// Returns when the record was created.
    #[must_use]
    pub const fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Returns when the record was last written.
    #[must_use]
    pub const fn last_modified(&self) -> OffsetDateTime {
        self.last_modified
    }

    /// Builds the propagation event that applies this migration to one
    /// aggregate's stream.
    ///
    /// Pure: the same event data is shared by every stream in a
    /// propagation batch.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user performing the propagation
    #[must_use]
    pub fn to_propagation_event(&self, user_id: UserId) -> EventPayload {
        EventPayload::TagMigrated {
            user_id,
            source_tag: self.source_tag.clone(),
            target_tag: self.target_tag.clone(),
        }
    }
}
