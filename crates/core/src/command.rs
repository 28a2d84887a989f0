// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lumen_tags_domain::{PostStatus, Tag, UserId};

/// A command against a post, as data only.
///
/// Commands are the only way to request state changes. Handling a command
/// validates it against the post's current state and produces the events
/// to append; it never mutates state directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostCommand {
    /// Create a new post.
    CreatePost {
        /// The user creating the post.
        user_id: UserId,
        /// The post's title.
        title: String,
        /// The tags to attach at creation, already resolved through any
        /// active migrations.
        tags: Vec<Tag>,
    },
    /// Add tags to the post.
    AddTags {
        /// The tags to add.
        tags: Vec<Tag>,
    },
    /// Remove tags from the post.
    RemoveTags {
        /// The tags to remove.
        tags: Vec<Tag>,
    },
    /// Change the post's processing status.
    ChangeStatus {
        /// The post's key, carried into the recorded event.
        post_id: String,
        /// The requested status.
        new_status: PostStatus,
        /// The user requesting the change.
        user_id: UserId,
    },
    /// Add a comment to the post.
    AddComment {
        /// The comment's author.
        user_id: UserId,
        /// The comment text.
        text: String,
    },
}

/// A command against a collection, as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionCommand {
    /// Create a new collection.
    CreateCollection {
        /// The user creating the collection.
        user_id: UserId,
        /// The collection's name.
        name: String,
        /// An optional description.
        description: Option<String>,
    },
    /// Add tags to the collection.
    AddTags {
        /// The tags to add.
        tags: Vec<Tag>,
    },
    /// Remove tags from the collection.
    RemoveTags {
        /// The tags to remove.
        tags: Vec<Tag>,
    },
}
