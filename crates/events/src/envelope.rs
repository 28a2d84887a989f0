// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::payload::EventPayload;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Identifies which kind of aggregate a stream belongs to.
///
/// The kind partitions the stream namespace: a post and a collection may
/// share a key without sharing a stream.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AggregateKind {
    /// A gallery post.
    Post,
    /// A curated collection of posts.
    Collection,
    /// A registered user profile.
    User,
}

impl AggregateKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Collection => "collection",
            Self::User => "user",
        }
    }
}

impl std::fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies one aggregate's event stream.
///
/// An aggregate id is the unit of ordering in the event store: events on
/// one stream are totally ordered by version; events across streams have
/// no ordering relationship.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AggregateId {
    /// The kind of aggregate the stream belongs to.
    kind: AggregateKind,
    /// The aggregate's key within its kind, assigned by the surrounding
    /// system (e.g. a post's public identifier).
    key: String,
}

impl AggregateId {
    /// Creates a post stream identity.
    ///
    /// # Arguments
    ///
    /// * `key` - The post's key
    #[must_use]
    pub fn post(key: &str) -> Self {
        Self {
            kind: AggregateKind::Post,
            key: key.to_string(),
        }
    }

    /// Creates a collection stream identity.
    ///
    /// # Arguments
    ///
    /// * `key` - The collection's key
    #[must_use]
    pub fn collection(key: &str) -> Self {
        Self {
            kind: AggregateKind::Collection,
            key: key.to_string(),
        }
    }

    /// Creates a user stream identity.
    ///
    /// # Arguments
    ///
    /// * `key` - The user's key
    #[must_use]
    pub fn user(key: &str) -> Self {
        Self {
            kind: AggregateKind::User,
            key: key.to_string(),
        }
    }

    /// Returns the kind of aggregate the stream belongs to.
    #[must_use]
    pub const fn kind(&self) -> AggregateKind {
        self.kind
    }

    /// Returns the aggregate's key within its kind.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for AggregateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.key)
    }
}

/// One event as recorded in a stream.
///
/// The envelope carries what the store assigned at append time — the
/// stream position and the recording timestamp — alongside the payload the
/// command produced. Reconstruction folds envelopes in version order;
/// aggregates read `recorded_at` for their audit fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    /// The stream this event was appended to.
    pub aggregate_id: AggregateId,
    /// The event's position in its stream, assigned sequentially from 1.
    pub version: u64,
    /// When the store recorded the event (UTC).
    pub recorded_at: OffsetDateTime,
    /// The event data produced at command time.
    pub payload: EventPayload,
}

impl RecordedEvent {
    /// Creates a new `RecordedEvent`.
    ///
    /// # Arguments
    ///
    /// * `aggregate_id` - The stream the event belongs to
    /// * `version` - The store-assigned position in the stream
    /// * `recorded_at` - The store-assigned recording timestamp
    /// * `payload` - The event data
    #[must_use]
    pub const fn new(
        aggregate_id: AggregateId,
        version: u64,
        recorded_at: OffsetDateTime,
        payload: EventPayload,
    ) -> Self {
        Self {
            aggregate_id,
            version,
            recorded_at,
            payload,
        }
    }
}
