// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregate::Aggregate;
use lumen_tags_domain::{PostStatus, Tag, UserId};
use lumen_tags_events::{EventPayload, RecordedEvent};
use std::collections::HashSet;
use time::OffsetDateTime;

/// A comment attached to a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// The comment's author.
    pub author: UserId,
    /// The comment text.
    pub text: String,
    /// When the comment's event was recorded (UTC).
    pub posted_at: OffsetDateTime,
}

impl Comment {
    /// Creates a new `Comment`.
    ///
    /// # Arguments
    ///
    /// * `author` - The comment's author
    /// * `text` - The comment text
    /// * `posted_at` - When the comment's event was recorded
    #[must_use]
    pub const fn new(author: UserId, text: String, posted_at: OffsetDateTime) -> Self {
        Self {
            author,
            text,
            posted_at,
        }
    }
}

/// The post aggregate, reconstructed from its event stream.
///
/// A post owns a set of tags (no duplicates by tag equality), a list of
/// comments in recording order, a processing status, and audit fields
/// derived from the envelopes of the events that shaped it. The default
/// value is the empty, not-yet-created post that reconstruction starts
/// from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Post {
    /// The post's title.
    pub title: String,
    /// The post's current tag set.
    pub tags: HashSet<Tag>,
    /// Comments in the order their events were recorded.
    pub comments: Vec<Comment>,
    /// The post's processing status.
    pub status: PostStatus,
    /// The user who created the post, once created.
    pub created_by: Option<UserId>,
    /// When the creating event was recorded (UTC).
    pub created_at: Option<OffsetDateTime>,
    /// When the latest applied event was recorded (UTC).
    pub last_modified: Option<OffsetDateTime>,
    /// The user behind the latest attributed event, where the payload
    /// carries one (tag add/remove events are unattributed).
    pub last_modified_by: Option<UserId>,
}

impl Post {
    /// Returns whether the post has been created from its initial event.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        self.created_at.is_some()
    }
}

impl Aggregate for Post {
    fn apply(&mut self, event: &RecordedEvent) {
        match &event.payload {
            EventPayload::PostCreated {
                user_id,
                title,
                tags,
            } => {
                self.title = title.clone();
                self.tags = tags.iter().cloned().collect();
                self.created_by = Some(user_id.clone());
                self.created_at = Some(event.recorded_at);
                self.last_modified_by = Some(user_id.clone());
            }
            EventPayload::TagAdded { tag } => {
                self.tags.insert(tag.clone());
            }
            EventPayload::TagRemoved { tag } => {
                self.tags.remove(tag);
            }
            EventPayload::TagMigrated {
                user_id,
                source_tag,
                target_tag,
            } => {
                // No-op when the source tag is absent, which also makes
                // duplicate delivery of the same migration harmless.
                if self.tags.remove(source_tag) {
                    self.tags.insert(target_tag.clone());
                    self.last_modified_by = Some(user_id.clone());
                }
            }
            EventPayload::StatusChanged {
                new_status,
                user_id,
                ..
            } => {
                self.status = *new_status;
                self.last_modified_by = Some(user_id.clone());
            }
            EventPayload::CommentAdded { user_id, text } => {
                self.comments.push(Comment::new(
                    user_id.clone(),
                    text.clone(),
                    event.recorded_at,
                ));
                self.last_modified_by = Some(user_id.clone());
            }
            // Events for other aggregate kinds are ignored during replay.
            EventPayload::CollectionCreated { .. } | EventPayload::UserRegistered { .. } => {}
        }
        self.last_modified = Some(event.recorded_at);
    }
}
