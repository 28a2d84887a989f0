// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregate::Aggregate;
use lumen_tags_domain::{Tag, UserId};
use lumen_tags_events::{EventPayload, RecordedEvent};
use std::collections::HashSet;
use time::OffsetDateTime;

/// The collection aggregate, reconstructed from its event stream.
///
/// Collections carry the same tag semantics as posts: the same add,
/// remove, and migration events apply to their tag set identically. They
/// have no processing status and no comments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collection {
    /// The collection's name.
    pub name: String,
    /// An optional description.
    pub description: Option<String>,
    /// The collection's current tag set.
    pub tags: HashSet<Tag>,
    /// The user who created the collection, once created.
    pub created_by: Option<UserId>,
    /// When the creating event was recorded (UTC).
    pub created_at: Option<OffsetDateTime>,
    /// When the latest applied event was recorded (UTC).
    pub last_modified: Option<OffsetDateTime>,
}

impl Collection {
    /// Returns whether the collection has been created from its initial
    /// event.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        self.created_at.is_some()
    }
}

impl Aggregate for Collection {
    fn apply(&mut self, event: &RecordedEvent) {
        match &event.payload {
            EventPayload::CollectionCreated {
                user_id,
                name,
                description,
            } => {
                self.name = name.clone();
                self.description = description.clone();
                self.created_by = Some(user_id.clone());
                self.created_at = Some(event.recorded_at);
            }
            EventPayload::TagAdded { tag } => {
                self.tags.insert(tag.clone());
            }
            EventPayload::TagRemoved { tag } => {
                self.tags.remove(tag);
            }
            EventPayload::TagMigrated {
                source_tag,
                target_tag,
                ..
            } => {
                if self.tags.remove(source_tag) {
                    self.tags.insert(target_tag.clone());
                }
            }
            // Events for other aggregate kinds are ignored during replay.
            EventPayload::PostCreated { .. }
            | EventPayload::StatusChanged { .. }
            | EventPayload::CommentAdded { .. }
            | EventPayload::UserRegistered { .. } => {}
        }
        self.last_modified = Some(event.recorded_at);
    }
}
