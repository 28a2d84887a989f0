// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cancel::CancelToken;
use crate::error::EngineError;
use futures::StreamExt;
use lumen_tags_domain::{DomainError, Tag, UserId};
use lumen_tags_events::{AggregateId, EventPayload, MigrationRecord};
use lumen_tags_store::{EventStore, MigrationStore, PostQuery};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How many posts each propagation batch covers unless overridden.
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// Tuning knobs for the migration engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationSettings {
    /// How many posts each propagation batch covers. Values below 1 are
    /// treated as 1.
    pub batch_size: usize,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// A request to migrate one tag to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRequest {
    /// The user requesting the migration.
    pub requested_by: UserId,
    /// The tag to retire.
    pub source: Tag,
    /// The tag to replace it with.
    pub target: Tag,
}

/// What a completed migration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOutcome {
    /// Human-readable summary of the migration.
    pub message: String,
    /// How many posts received the propagation event.
    pub posts_migrated: usize,
    /// How many upstream migration records chain repair replaced.
    pub upstream_migrations_updated: usize,
}

/// Orchestrates tag migrations end to end.
///
/// A migration runs as four sequential phases after a purely in-memory
/// request check:
///
/// 1. **Conflict check** — the source tag must not already have an
///    active migration. Rejection here writes nothing.
/// 2. **Record persistence** — the new migration record is inserted, so
///    resolution starts steering new tag usage immediately.
/// 3. **Chain repair** — records whose target is the retired source are
///    repointed at the new target, keeping every stored mapping
///    terminal.
/// 4. **Propagation** — every post carrying the source tag receives the
///    migration event, in batches, each batch persisted before the next
///    is read.
///
/// The phases are not atomic as a whole: a failure partway leaves the
/// phases already completed in place. Each phase is safe to re-run —
/// replay treats a migration event with an absent source tag as a no-op,
/// so re-propagating after a partial failure converges instead of
/// corrupting.
///
/// Cancellation is checked before each phase and before each propagation
/// batch is persisted; a batch is never abandoned halfway.
pub struct MigrationEngine {
    events: Arc<dyn EventStore>,
    migrations: Arc<dyn MigrationStore>,
    posts: Arc<dyn PostQuery>,
    settings: MigrationSettings,
}

impl MigrationEngine {
    /// Creates an engine with default settings.
    ///
    /// # Arguments
    ///
    /// * `events` - The event stream store propagation appends to
    /// * `migrations` - The migration record table
    /// * `posts` - The post-by-tag query propagation reads from
    #[must_use]
    pub fn new(
        events: Arc<dyn EventStore>,
        migrations: Arc<dyn MigrationStore>,
        posts: Arc<dyn PostQuery>,
    ) -> Self {
        Self {
            events,
            migrations,
            posts,
            settings: MigrationSettings::default(),
        }
    }

    /// Replaces the engine's settings.
    #[must_use]
    pub const fn with_settings(mut self, settings: MigrationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Runs one tag migration.
    ///
    /// # Arguments
    ///
    /// * `request` - The migration to perform
    /// * `cancel` - Cancellation signal, checked between phases and
    ///   between propagation batches
    ///
    /// # Returns
    ///
    /// A summary of what the migration did: how many posts were updated
    /// and how many upstream records chain repair replaced.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Domain` if the request maps a tag to itself
    /// or carries a blank requester — both rejected before any store
    /// access. Returns `EngineError::MigrationAlreadyExists` if the
    /// source tag already has an active migration. Returns
    /// `EngineError::Cancelled` if the token fires between phases or
    /// batches, and `EngineError::Store` if a storage operation fails.
    pub async fn migrate(
        &self,
        request: MigrationRequest,
        cancel: &CancelToken,
    ) -> Result<MigrationOutcome, EngineError> {
        // Request checks live before any store access, so a bad request
        // can never leave a mark.
        if request.source == request.target {
            return Err(EngineError::Domain(DomainError::SelfMigration {
                tag: request.source,
            }));
        }
        let record: MigrationRecord = MigrationRecord::new(
            request.requested_by.clone(),
            request.source.clone(),
            request.target.clone(),
        )?;

        ensure_not_cancelled(cancel, "conflict check")?;
        if let Some(existing) = self.migrations.find_by_source(&request.source).await? {
            return Err(EngineError::MigrationAlreadyExists {
                source: request.source,
                target: existing.target_tag().clone(),
            });
        }

        ensure_not_cancelled(cancel, "record persistence")?;
        let record: MigrationRecord = self.migrations.insert(record).await?;
        info!(
            source = %record.source_tag(),
            target = %record.target_tag(),
            requested_by = %record.created_by(),
            "Created migration record"
        );

        ensure_not_cancelled(cancel, "chain repair")?;
        let upstream_migrations_updated: usize = self.repair_upstream(&record).await?;

        ensure_not_cancelled(cancel, "propagation")?;
        let posts_migrated: usize = self
            .propagate(&record, request.requested_by, cancel)
            .await?;

        info!(
            posts_migrated,
            upstream_migrations_updated,
            source = %record.source_tag(),
            target = %record.target_tag(),
            "Migration complete"
        );
        Ok(MigrationOutcome {
            message: format!(
                "Migrated tag '{}' to '{}'",
                record.source_tag(),
                record.target_tag()
            ),
            posts_migrated,
            upstream_migrations_updated,
        })
    }

    /// Repoints migrations that target the retired source at the new
    /// target.
    ///
    /// Replacement keeps each record's original requester. A record that
    /// cannot be repaired — its replacement would map a tag to itself,
    /// or its stored attribution fails validation — is skipped with a
    /// warning and left in place. Retired records are removed and their
    /// replacements written in bulk.
    async fn repair_upstream(&self, record: &MigrationRecord) -> Result<usize, EngineError> {
        let upstream: Vec<MigrationRecord> =
            self.migrations.find_by_target(record.source_tag()).await?;
        if upstream.is_empty() {
            return Ok(0);
        }
        let mut retired: Vec<MigrationRecord> = Vec::new();
        let mut replacements: Vec<MigrationRecord> = Vec::new();
        for old in upstream {
            if old.source_tag() == record.target_tag() {
                // Repointing this record would make it map a tag to
                // itself.
                warn!(
                    source = %old.source_tag(),
                    target = %old.target_tag(),
                    "Skipping upstream record whose repair would self-map"
                );
                continue;
            }
            match MigrationRecord::new(
                old.created_by().clone(),
                old.source_tag().clone(),
                record.target_tag().clone(),
            ) {
                Ok(replacement) => {
                    retired.push(old);
                    replacements.push(replacement);
                }
                Err(err) => {
                    warn!(
                        source = %old.source_tag(),
                        target = %old.target_tag(),
                        error = %err,
                        "Skipping upstream record that cannot be repaired"
                    );
                }
            }
        }
        if retired.is_empty() {
            return Ok(0);
        }
        let updated: usize = replacements.len();
        self.migrations.delete_many(&retired).await?;
        self.migrations.insert_many(replacements).await?;
        info!(
            updated,
            target = %record.target_tag(),
            "Repaired upstream migration chains"
        );
        Ok(updated)
    }

    /// Applies the migration to every post carrying the source tag.
    ///
    /// Posts are read lazily and handled in batches; each batch shares
    /// one event and is persisted before the next batch is read.
    async fn propagate(
        &self,
        record: &MigrationRecord,
        requested_by: UserId,
        cancel: &CancelToken,
    ) -> Result<usize, EngineError> {
        let event: EventPayload = record.to_propagation_event(requested_by);
        let batch_size: usize = self.settings.batch_size.max(1);
        let mut batches = self
            .posts
            .stream_posts_with_tag(record.source_tag())
            .chunks(batch_size);
        let mut posts_migrated: usize = 0;
        while let Some(batch) = batches.next().await {
            let ids: Vec<AggregateId> = batch.into_iter().collect::<Result<_, _>>()?;
            ensure_not_cancelled(cancel, "the next propagation batch")?;
            let written: usize = self.events.append_to_many(&ids, &event).await?;
            posts_migrated += written;
            debug!(
                batch = ids.len(),
                total = posts_migrated,
                "Propagated migration batch"
            );
        }
        Ok(posts_migrated)
    }
}

fn ensure_not_cancelled(cancel: &CancelToken, phase: &'static str) -> Result<(), EngineError> {
    if cancel.is_cancelled() {
        warn!(phase, "Migration cancelled");
        return Err(EngineError::Cancelled { phase });
    }
    Ok(())
}
