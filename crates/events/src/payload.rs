// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lumen_tags_domain::{PostStatus, Tag, UserId};
use serde::{Deserialize, Serialize};

/// The data recorded by one event, as produced at command time.
///
/// Payloads are a closed, tagged union: aggregates dispatch on the variant
/// during replay, and stores persist the serialized form. Payloads carry
/// no stream position or timestamp — those belong to the envelope
/// ([`RecordedEvent`](crate::RecordedEvent)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventPayload {
    /// A post was created.
    PostCreated {
        /// The user who created the post.
        user_id: UserId,
        /// The post's title.
        title: String,
        /// The tags attached at creation, already resolved and validated.
        tags: Vec<Tag>,
    },
    /// A tag was added to an aggregate.
    TagAdded {
        /// The tag that was added.
        tag: Tag,
    },
    /// A tag was removed from an aggregate.
    TagRemoved {
        /// The tag that was removed.
        tag: Tag,
    },
    /// A tag migration was applied to an aggregate.
    ///
    /// Application replaces `source_tag` with `target_tag` on the
    /// aggregate's tag set, and is a no-op if `source_tag` is absent.
    TagMigrated {
        /// The user who requested the migration.
        user_id: UserId,
        /// The tag being retired.
        source_tag: Tag,
        /// The tag replacing it.
        target_tag: Tag,
    },
    /// A post's processing status changed.
    StatusChanged {
        /// The post whose status changed.
        post_id: String,
        /// The status the post moved to.
        new_status: PostStatus,
        /// The user who requested the change.
        user_id: UserId,
    },
    /// A comment was added to a post.
    CommentAdded {
        /// The comment's author.
        user_id: UserId,
        /// The comment text.
        text: String,
    },
    /// A collection was created.
    CollectionCreated {
        /// The user who created the collection.
        user_id: UserId,
        /// The collection's name.
        name: String,
        /// An optional description.
        description: Option<String>,
    },
    /// A user profile was registered.
    UserRegistered {
        /// The user's display name.
        display_name: String,
    },
}

impl EventPayload {
    /// Returns the payload's type name, for logging and diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PostCreated { .. } => "PostCreated",
            Self::TagAdded { .. } => "TagAdded",
            Self::TagRemoved { .. } => "TagRemoved",
            Self::TagMigrated { .. } => "TagMigrated",
            Self::StatusChanged { .. } => "StatusChanged",
            Self::CommentAdded { .. } => "CommentAdded",
            Self::CollectionCreated { .. } => "CollectionCreated",
            Self::UserRegistered { .. } => "UserRegistered",
        }
    }
}
