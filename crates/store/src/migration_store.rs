// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use async_trait::async_trait;
use lumen_tags_domain::Tag;
use lumen_tags_events::MigrationRecord;

/// Lookup and replacement access to the migration record table.
///
/// The table is keyed by source tag: the orchestrator guarantees at most
/// one record per source by looking the source up before creating, so
/// backends are not required to enforce uniqueness themselves. A backend
/// that does enforce it reports a violation as `StoreError::Backend`.
#[async_trait]
pub trait MigrationStore: Send + Sync {
    /// Finds the record whose source tag matches, if one exists.
    ///
    /// # Arguments
    ///
    /// * `source` - The source tag to look up
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend cannot be read.
    async fn find_by_source(&self, source: &Tag) -> Result<Option<MigrationRecord>, StoreError>;

    /// Finds every record whose target tag matches.
    ///
    /// Used by chain repair to locate upstream mappings that point at a
    /// tag being retired.
    ///
    /// # Arguments
    ///
    /// * `target` - The target tag to look up
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend cannot be read.
    async fn find_by_target(&self, target: &Tag) -> Result<Vec<MigrationRecord>, StoreError>;

    /// Inserts one record and returns it with its assigned identifier.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to persist
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend rejects the insert.
    async fn insert(&self, record: MigrationRecord) -> Result<MigrationRecord, StoreError>;

    /// Deletes one record.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to delete
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MigrationNotFound` if no stored record
    /// matches.
    async fn delete(&self, record: &MigrationRecord) -> Result<(), StoreError>;

    /// Inserts a batch of records and returns them with assigned
    /// identifiers.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to persist
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend rejects any insert.
    async fn insert_many(
        &self,
        records: Vec<MigrationRecord>,
    ) -> Result<Vec<MigrationRecord>, StoreError>;

    /// Deletes a batch of records.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to delete
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MigrationNotFound` if any record is missing.
    async fn delete_many(&self, records: &[MigrationRecord]) -> Result<(), StoreError>;
}
