// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use async_trait::async_trait;
use lumen_tags_events::{AggregateId, EventPayload, RecordedEvent};
use time::OffsetDateTime;

/// Bounds for a windowed stream read. Both bounds are inclusive; a field
/// left as `None` does not constrain that side.
///
/// The default window is unbounded and reads the full stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamWindow {
    /// The first stream version to include.
    pub from_version: Option<u64>,
    /// The latest recording timestamp to include. Reading up to a
    /// timestamp reconstructs an aggregate as it was at that moment.
    pub to_timestamp: Option<OffsetDateTime>,
}

impl StreamWindow {
    /// Returns whether an event at the given position falls inside this
    /// window.
    ///
    /// # Arguments
    ///
    /// * `version` - The event's stream version
    /// * `recorded_at` - The event's recording timestamp
    #[must_use]
    pub fn contains(&self, version: u64, recorded_at: OffsetDateTime) -> bool {
        self.from_version.is_none_or(|from| version >= from)
            && self.to_timestamp.is_none_or(|to| recorded_at <= to)
    }
}

/// Append and read access to ordered event streams.
///
/// Implementations assign each appended event its stream version
/// (sequential from 1) and recording timestamp; callers never choose
/// either. Reads return events in version order.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Appends one event to one stream.
    ///
    /// # Arguments
    ///
    /// * `aggregate_id` - The stream to append to
    /// * `payload` - The event data to record
    ///
    /// # Returns
    ///
    /// The recorded event, carrying the assigned version and timestamp.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend rejects the append.
    async fn append_to_stream(
        &self,
        aggregate_id: &AggregateId,
        payload: EventPayload,
    ) -> Result<RecordedEvent, StoreError>;

    /// Appends the same event data to every listed stream.
    ///
    /// Each stream receives its own copy at its own next version. The
    /// append is a single storage operation: either every stream in the
    /// batch is written or none is.
    ///
    /// # Arguments
    ///
    /// * `aggregate_ids` - The streams to append to
    /// * `payload` - The event data shared by the batch
    ///
    /// # Returns
    ///
    /// The number of streams written.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend rejects the append.
    async fn append_to_many(
        &self,
        aggregate_ids: &[AggregateId],
        payload: &EventPayload,
    ) -> Result<usize, StoreError>;

    /// Reads one stream in full, in version order.
    ///
    /// A stream that has never been appended to reads as empty.
    ///
    /// # Arguments
    ///
    /// * `aggregate_id` - The stream to read
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend cannot be read.
    async fn read_stream(
        &self,
        aggregate_id: &AggregateId,
    ) -> Result<Vec<RecordedEvent>, StoreError> {
        self.read_stream_window(aggregate_id, StreamWindow::default())
            .await
    }

    /// Reads the part of one stream that falls inside a window, in
    /// version order.
    ///
    /// # Arguments
    ///
    /// * `aggregate_id` - The stream to read
    /// * `window` - The inclusive bounds to apply
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend cannot be read.
    async fn read_stream_window(
        &self,
        aggregate_id: &AggregateId,
        window: StreamWindow,
    ) -> Result<Vec<RecordedEvent>, StoreError>;
}
