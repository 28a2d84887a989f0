// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collection::Collection;
use crate::command::{CollectionCommand, PostCommand};
use crate::error::CoreError;
use crate::post::Post;
use lumen_tags_domain::{
    DomainError, Tag, validate_collection_name, validate_comment_text, validate_title,
    validate_user_id,
};
use lumen_tags_events::EventPayload;
use std::collections::HashSet;

/// Handles a command against a post, producing the events to append.
///
/// Validation happens here, once, before any event exists; replaying the
/// produced events never re-checks these rules. The caller appends the
/// events to the post's stream and reconstructs to observe the new state.
///
/// # Arguments
///
/// * `post` - The post's current state, reconstructed from its stream
/// * `command` - The command to handle
///
/// # Returns
///
/// * `Ok(Vec<EventPayload>)` with at least one event to append
/// * `Err(CoreError)` if the command is invalid against the current state
///
/// # Errors
///
/// Returns an error if:
/// - The command violates domain rules (blank user id, invalid title or
///   comment, invalid status transition)
/// - The post already exists (for `CreatePost`) or does not exist yet
///   (for every other command)
/// - The requested tag change would be a no-op (`NoNewTags`,
///   `NoTagsToRemove`)
pub fn handle_post(post: &Post, command: PostCommand) -> Result<Vec<EventPayload>, CoreError> {
    match command {
        PostCommand::CreatePost {
            user_id,
            title,
            tags,
        } => {
            // A post is created exactly once.
            if post.is_created() {
                return Err(CoreError::DomainViolation(DomainError::PostAlreadyCreated));
            }

            validate_user_id(&user_id)?;
            validate_title(&title)?;

            Ok(vec![EventPayload::PostCreated {
                user_id,
                title: title.trim().to_string(),
                tags,
            }])
        }
        PostCommand::AddTags { tags } => {
            if !post.is_created() {
                return Err(CoreError::DomainViolation(DomainError::PostNotFound));
            }

            plan_tag_additions(&post.tags, tags)
        }
        PostCommand::RemoveTags { tags } => {
            if !post.is_created() {
                return Err(CoreError::DomainViolation(DomainError::PostNotFound));
            }

            plan_tag_removals(&post.tags, tags)
        }
        PostCommand::ChangeStatus {
            post_id,
            new_status,
            user_id,
        } => {
            if !post.is_created() {
                return Err(CoreError::DomainViolation(DomainError::PostNotFound));
            }

            validate_user_id(&user_id)?;

            // Transition rules are enforced here only; replay applies the
            // recorded status unconditionally.
            post.status.validate_transition(new_status)?;

            Ok(vec![EventPayload::StatusChanged {
                post_id,
                new_status,
                user_id,
            }])
        }
        PostCommand::AddComment { user_id, text } => {
            if !post.is_created() {
                return Err(CoreError::DomainViolation(DomainError::PostNotFound));
            }

            validate_user_id(&user_id)?;
            validate_comment_text(&text)?;

            Ok(vec![EventPayload::CommentAdded { user_id, text }])
        }
    }
}

/// Handles a command against a collection, producing the events to append.
///
/// # Arguments
///
/// * `collection` - The collection's current state
/// * `command` - The command to handle
///
/// # Returns
///
/// * `Ok(Vec<EventPayload>)` with at least one event to append
/// * `Err(CoreError)` if the command is invalid against the current state
///
/// # Errors
///
/// Returns an error if:
/// - The command violates domain rules (blank user id, invalid name)
/// - The collection already exists (for `CreateCollection`) or does not
///   exist yet (for the tag commands)
/// - The requested tag change would be a no-op (`NoNewTags`,
///   `NoTagsToRemove`)
pub fn handle_collection(
    collection: &Collection,
    command: CollectionCommand,
) -> Result<Vec<EventPayload>, CoreError> {
    match command {
        CollectionCommand::CreateCollection {
            user_id,
            name,
            description,
        } => {
            // A collection is created exactly once.
            if collection.is_created() {
                return Err(CoreError::DomainViolation(
                    DomainError::CollectionAlreadyCreated,
                ));
            }

            validate_user_id(&user_id)?;
            validate_collection_name(&name)?;

            Ok(vec![EventPayload::CollectionCreated {
                user_id,
                name: name.trim().to_string(),
                description,
            }])
        }
        CollectionCommand::AddTags { tags } => {
            if !collection.is_created() {
                return Err(CoreError::DomainViolation(DomainError::CollectionNotFound));
            }

            plan_tag_additions(&collection.tags, tags)
        }
        CollectionCommand::RemoveTags { tags } => {
            if !collection.is_created() {
                return Err(CoreError::DomainViolation(DomainError::CollectionNotFound));
            }

            plan_tag_removals(&collection.tags, tags)
        }
    }
}

/// Plans `TagAdded` events for the genuinely new subset of a request.
///
/// Rejects the request outright when every requested tag is already
/// present; otherwise produces one event per new tag, in request order.
/// Duplicates within the request produce a single event.
fn plan_tag_additions(
    current: &HashSet<Tag>,
    requested: Vec<Tag>,
) -> Result<Vec<EventPayload>, CoreError> {
    let requested_count: usize = requested.len();
    let mut seen: HashSet<Tag> = HashSet::new();
    let mut events: Vec<EventPayload> = Vec::new();

    for tag in requested {
        if current.contains(&tag) || !seen.insert(tag.clone()) {
            continue;
        }
        events.push(EventPayload::TagAdded { tag });
    }

    if events.is_empty() {
        return Err(CoreError::DomainViolation(DomainError::NoNewTags {
            requested: requested_count,
        }));
    }
    Ok(events)
}

/// Plans `TagRemoved` events for the present subset of a request.
///
/// Rejects the request outright when none of the requested tags are
/// present; otherwise produces one event per present tag, in request
/// order. Duplicates within the request produce a single event.
fn plan_tag_removals(
    current: &HashSet<Tag>,
    requested: Vec<Tag>,
) -> Result<Vec<EventPayload>, CoreError> {
    let requested_count: usize = requested.len();
    let mut seen: HashSet<Tag> = HashSet::new();
    let mut events: Vec<EventPayload> = Vec::new();

    for tag in requested {
        if !current.contains(&tag) || !seen.insert(tag.clone()) {
            continue;
        }
        events.push(EventPayload::TagRemoved { tag });
    }

    if events.is_empty() {
        return Err(CoreError::DomainViolation(DomainError::NoTagsToRemove {
            requested: requested_count,
        }));
    }
    Ok(events)
}
