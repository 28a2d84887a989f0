// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Tag;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Tag value is empty or whitespace.
    EmptyTag,
    /// Tag value is shorter than the minimum length.
    TagTooShort {
        /// The trimmed length of the rejected value, in characters.
        length: usize,
    },
    /// Tag value is longer than the maximum length.
    TagTooLong {
        /// The trimmed length of the rejected value, in characters.
        length: usize,
    },
    /// Tag category string is not recognized.
    InvalidTagCategory(String),
    /// Post status string is not recognized.
    InvalidStatus(String),
    /// Requested status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
    /// User identifier is empty or whitespace.
    EmptyUserId,
    /// Post title is empty or invalid.
    InvalidTitle(String),
    /// Comment text is empty or whitespace.
    EmptyComment,
    /// Collection name is empty or invalid.
    InvalidCollectionName(String),
    /// Post has already been created from an initial event.
    PostAlreadyCreated,
    /// Collection has already been created from an initial event.
    CollectionAlreadyCreated,
    /// Referenced post has no creating event in its stream.
    PostNotFound,
    /// Referenced collection has no creating event in its stream.
    CollectionNotFound,
    /// Every requested tag is already present on the aggregate.
    NoNewTags {
        /// How many tags the request carried.
        requested: usize,
    },
    /// None of the requested tags are present on the aggregate.
    NoTagsToRemove {
        /// How many tags the request carried.
        requested: usize,
    },
    /// A tag cannot be migrated to itself.
    SelfMigration {
        /// The tag named as both source and target.
        tag: Tag,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTag => write!(f, "Tag value must not be empty"),
            Self::TagTooShort { length } => {
                write!(
                    f,
                    "Tag value is {length} characters; must be at least {}",
                    Tag::MIN_VALUE_LENGTH
                )
            }
            Self::TagTooLong { length } => {
                write!(
                    f,
                    "Tag value is {length} characters; must be at most {}",
                    Tag::MAX_VALUE_LENGTH
                )
            }
            Self::InvalidTagCategory(value) => {
                write!(f, "Invalid tag category: '{value}'")
            }
            Self::InvalidStatus(value) => write!(f, "Invalid post status: '{value}'"),
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition from '{from}' to '{to}': {reason}")
            }
            Self::EmptyUserId => write!(f, "User id must not be empty"),
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::EmptyComment => write!(f, "Comment text must not be empty"),
            Self::InvalidCollectionName(msg) => {
                write!(f, "Invalid collection name: {msg}")
            }
            Self::PostAlreadyCreated => {
                write!(f, "Post has already been created")
            }
            Self::CollectionAlreadyCreated => {
                write!(f, "Collection has already been created")
            }
            Self::PostNotFound => write!(f, "Post does not exist"),
            Self::CollectionNotFound => write!(f, "Collection does not exist"),
            Self::NoNewTags { requested } => {
                write!(f, "All {requested} requested tags are already present")
            }
            Self::NoTagsToRemove { requested } => {
                write!(f, "None of the {requested} requested tags are present")
            }
            Self::SelfMigration { tag } => {
                write!(f, "Cannot migrate tag '{tag}' to itself")
            }
        }
    }
}

impl std::error::Error for DomainError {}
