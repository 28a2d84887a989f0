// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use crate::event_store::{EventStore, StreamWindow};
use crate::migration_store::MigrationStore;
use crate::post_query::PostQuery;
use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::{StreamExt, stream};
use lumen_tags_domain::Tag;
use lumen_tags_events::{
    AggregateId, AggregateKind, EventPayload, MigrationRecord, RecordedEvent,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::debug;

/// One event as stored, with the payload kept in its serialized form.
///
/// Keeping the wire form in memory means every append and read exercises
/// the same serialization path a document store would.
#[derive(Debug, Clone)]
struct StoredEvent {
    version: u64,
    recorded_at: OffsetDateTime,
    payload_json: String,
}

/// In-memory storage backend.
///
/// Implements all three storage contracts over shared maps guarded by
/// async mutexes. Clones share the same underlying storage, so one
/// instance can be handed to the event store, migration store, and post
/// query seams of a single engine.
///
/// Intended for tests and development; nothing survives the process.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    /// Event streams keyed by aggregate id, each held in version order.
    streams: Arc<Mutex<HashMap<AggregateId, Vec<StoredEvent>>>>,
    /// Which post streams currently carry which tag. Maintained on
    /// append, following the same rules replay applies to a post's tag
    /// set.
    tag_index: Arc<Mutex<HashMap<Tag, BTreeSet<AggregateId>>>>,
    /// The migration record table.
    migrations: Arc<Mutex<Vec<MigrationRecord>>>,
    /// The next migration record identifier to assign.
    next_migration_id: Arc<AtomicI64>,
    /// Sizes of the bulk appends performed so far, in order. Lets tests
    /// observe batching behavior.
    bulk_append_log: Arc<Mutex<Vec<usize>>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            streams: Arc::new(Mutex::new(HashMap::new())),
            tag_index: Arc::new(Mutex::new(HashMap::new())),
            migrations: Arc::new(Mutex::new(Vec::new())),
            next_migration_id: Arc::new(AtomicI64::new(1)),
            bulk_append_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the sizes of the bulk appends performed so far, in order.
    pub async fn bulk_append_sizes(&self) -> Vec<usize> {
        self.bulk_append_log.lock().await.clone()
    }

    /// Returns every stored migration record.
    pub async fn all_migrations(&self) -> Vec<MigrationRecord> {
        self.migrations.lock().await.clone()
    }

    /// Returns the total number of events across all streams.
    pub async fn event_count(&self) -> usize {
        self.streams.lock().await.values().map(Vec::len).sum()
    }

    /// Applies a payload's tag effects to the post tag index.
    async fn index_post_tags(&self, aggregate_id: &AggregateId, payload: &EventPayload) {
        if aggregate_id.kind() != AggregateKind::Post {
            return;
        }
        let mut index = self.tag_index.lock().await;
        match payload {
            EventPayload::PostCreated { tags, .. } => {
                for tag in tags {
                    index
                        .entry(tag.clone())
                        .or_default()
                        .insert(aggregate_id.clone());
                }
            }
            EventPayload::TagAdded { tag } => {
                index
                    .entry(tag.clone())
                    .or_default()
                    .insert(aggregate_id.clone());
            }
            EventPayload::TagRemoved { tag } => {
                if let Some(ids) = index.get_mut(tag) {
                    ids.remove(aggregate_id);
                }
            }
            EventPayload::TagMigrated {
                source_tag,
                target_tag,
                ..
            } => {
                // Move only when the source is present, the same rule
                // replay follows for a post's tag set.
                let had_source: bool = index
                    .get_mut(source_tag)
                    .is_some_and(|ids| ids.remove(aggregate_id));
                if had_source {
                    index
                        .entry(target_tag.clone())
                        .or_default()
                        .insert(aggregate_id.clone());
                }
            }
            EventPayload::StatusChanged { .. }
            | EventPayload::CommentAdded { .. }
            | EventPayload::CollectionCreated { .. }
            | EventPayload::UserRegistered { .. } => {}
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventStore for InMemoryStore {
    async fn append_to_stream(
        &self,
        aggregate_id: &AggregateId,
        payload: EventPayload,
    ) -> Result<RecordedEvent, StoreError> {
        let payload_json: String = serde_json::to_string(&payload)?;
        let recorded_at: OffsetDateTime = OffsetDateTime::now_utc();
        let version: u64 = {
            let mut streams = self.streams.lock().await;
            let stream = streams.entry(aggregate_id.clone()).or_default();
            let version: u64 = stream.last().map_or(1, |event| event.version + 1);
            stream.push(StoredEvent {
                version,
                recorded_at,
                payload_json,
            });
            version
        };
        self.index_post_tags(aggregate_id, &payload).await;
        debug!(
            stream = %aggregate_id,
            version,
            kind = payload.kind(),
            "Appended event"
        );
        Ok(RecordedEvent::new(
            aggregate_id.clone(),
            version,
            recorded_at,
            payload,
        ))
    }

    async fn append_to_many(
        &self,
        aggregate_ids: &[AggregateId],
        payload: &EventPayload,
    ) -> Result<usize, StoreError> {
        let payload_json: String = serde_json::to_string(payload)?;
        // One timestamp for the whole batch: the batch is a single
        // storage operation.
        let recorded_at: OffsetDateTime = OffsetDateTime::now_utc();
        {
            let mut streams = self.streams.lock().await;
            for aggregate_id in aggregate_ids {
                let stream = streams.entry(aggregate_id.clone()).or_default();
                let version: u64 = stream.last().map_or(1, |event| event.version + 1);
                stream.push(StoredEvent {
                    version,
                    recorded_at,
                    payload_json: payload_json.clone(),
                });
            }
        }
        for aggregate_id in aggregate_ids {
            self.index_post_tags(aggregate_id, payload).await;
        }
        self.bulk_append_log.lock().await.push(aggregate_ids.len());
        debug!(
            streams = aggregate_ids.len(),
            kind = payload.kind(),
            "Appended event to stream batch"
        );
        Ok(aggregate_ids.len())
    }

    async fn read_stream_window(
        &self,
        aggregate_id: &AggregateId,
        window: StreamWindow,
    ) -> Result<Vec<RecordedEvent>, StoreError> {
        let streams = self.streams.lock().await;
        let Some(stream) = streams.get(aggregate_id) else {
            return Ok(Vec::new());
        };
        let mut events: Vec<RecordedEvent> = Vec::new();
        for stored in stream {
            if !window.contains(stored.version, stored.recorded_at) {
                continue;
            }
            let payload: EventPayload = serde_json::from_str(&stored.payload_json)?;
            events.push(RecordedEvent::new(
                aggregate_id.clone(),
                stored.version,
                stored.recorded_at,
                payload,
            ));
        }
        Ok(events)
    }
}

#[async_trait]
impl MigrationStore for InMemoryStore {
    async fn find_by_source(&self, source: &Tag) -> Result<Option<MigrationRecord>, StoreError> {
        let migrations = self.migrations.lock().await;
        Ok(migrations
            .iter()
            .find(|record| record.source_tag() == source)
            .cloned())
    }

    async fn find_by_target(&self, target: &Tag) -> Result<Vec<MigrationRecord>, StoreError> {
        let migrations = self.migrations.lock().await;
        Ok(migrations
            .iter()
            .filter(|record| record.target_tag() == target)
            .cloned()
            .collect())
    }

    async fn insert(&self, record: MigrationRecord) -> Result<MigrationRecord, StoreError> {
        let id: i64 = self.next_migration_id.fetch_add(1, Ordering::Relaxed);
        let assigned: MigrationRecord = MigrationRecord::with_id(
            id,
            record.created_by().clone(),
            record.source_tag().clone(),
            record.target_tag().clone(),
            record.created_at(),
            record.last_modified(),
        );
        self.migrations.lock().await.push(assigned.clone());
        debug!(
            migration_id = id,
            source = %assigned.source_tag(),
            target = %assigned.target_tag(),
            "Inserted migration record"
        );
        Ok(assigned)
    }

    async fn delete(&self, record: &MigrationRecord) -> Result<(), StoreError> {
        let mut migrations = self.migrations.lock().await;
        // Match by identifier when the record has one; unpersisted
        // records fall back to their source tag.
        let position: Option<usize> = migrations.iter().position(|candidate| {
            record.migration_id().map_or(
                candidate.source_tag() == record.source_tag(),
                |id| candidate.migration_id() == Some(id),
            )
        });
        match position {
            Some(index) => {
                migrations.remove(index);
                Ok(())
            }
            None => Err(StoreError::MigrationNotFound {
                source: record.source_tag().clone(),
            }),
        }
    }

    async fn insert_many(
        &self,
        records: Vec<MigrationRecord>,
    ) -> Result<Vec<MigrationRecord>, StoreError> {
        let mut assigned: Vec<MigrationRecord> = Vec::with_capacity(records.len());
        for record in records {
            assigned.push(self.insert(record).await?);
        }
        Ok(assigned)
    }

    async fn delete_many(&self, records: &[MigrationRecord]) -> Result<(), StoreError> {
        for record in records {
            self.delete(record).await?;
        }
        Ok(())
    }
}

impl PostQuery for InMemoryStore {
    fn stream_posts_with_tag(
        &self,
        tag: &Tag,
    ) -> BoxStream<'static, Result<AggregateId, StoreError>> {
        let index: Arc<Mutex<HashMap<Tag, BTreeSet<AggregateId>>>> = Arc::clone(&self.tag_index);
        let tag: Tag = tag.clone();
        // Deferred: the index is consulted at first poll, not at call
        // time, and each call starts over from the current index.
        stream::once(async move {
            let ids: Vec<AggregateId> = index
                .lock()
                .await
                .get(&tag)
                .map_or_else(Vec::new, |ids| ids.iter().cloned().collect());
            stream::iter(ids.into_iter().map(Ok))
        })
        .flatten()
        .boxed()
    }
}
