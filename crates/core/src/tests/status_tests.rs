// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_post, create_test_user, recorded};
use crate::{CoreError, Post, PostCommand, handle_post, reconstruct};
use lumen_tags_domain::{DomainError, PostStatus, UserId};
use lumen_tags_events::{EventPayload, RecordedEvent};

fn post_in_status(status: PostStatus) -> Post {
    let mut events: Vec<RecordedEvent> = vec![recorded(
        1,
        EventPayload::PostCreated {
            user_id: create_test_user(),
            title: String::from("Morning haze"),
            tags: Vec::new(),
        },
    )];
    if status != PostStatus::Pending {
        events.push(recorded(
            2,
            EventPayload::StatusChanged {
                post_id: String::from("post-41"),
                new_status: status,
                user_id: create_test_user(),
            },
        ));
    }
    reconstruct(&events)
}

fn change_status_command(new_status: PostStatus) -> PostCommand {
    PostCommand::ChangeStatus {
        post_id: String::from("post-41"),
        new_status,
        user_id: create_test_user(),
    }
}

// ============================================================================
// Permitted transitions
// ============================================================================

#[test]
fn test_change_status_pending_to_processing() {
    let post: Post = post_in_status(PostStatus::Pending);

    let events: Vec<EventPayload> =
        handle_post(&post, change_status_command(PostStatus::Processing)).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        EventPayload::StatusChanged {
            post_id: String::from("post-41"),
            new_status: PostStatus::Processing,
            user_id: create_test_user(),
        }
    );
}

#[test]
fn test_change_status_processing_to_completed() {
    let post: Post = post_in_status(PostStatus::Processing);

    let events: Vec<EventPayload> =
        handle_post(&post, change_status_command(PostStatus::Completed)).unwrap();

    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        EventPayload::StatusChanged {
            new_status: PostStatus::Completed,
            ..
        }
    ));
}

#[test]
fn test_change_status_processing_to_failed() {
    let post: Post = post_in_status(PostStatus::Processing);

    let events: Vec<EventPayload> =
        handle_post(&post, change_status_command(PostStatus::Failed)).unwrap();

    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        EventPayload::StatusChanged {
            new_status: PostStatus::Failed,
            ..
        }
    ));
}

// ============================================================================
// Rejected transitions
// ============================================================================

#[test]
fn test_change_status_rejects_skipping_processing() {
    let post: Post = post_in_status(PostStatus::Pending);

    let result: Result<Vec<EventPayload>, CoreError> =
        handle_post(&post, change_status_command(PostStatus::Completed));

    match result {
        Err(CoreError::DomainViolation(DomainError::InvalidStatusTransition {
            from,
            to,
            reason,
        })) => {
            assert_eq!(from, "pending");
            assert_eq!(to, "completed");
            assert_eq!(reason, "transition is not permitted");
        }
        other => panic!("expected InvalidStatusTransition, got {other:?}"),
    }
}

#[test]
fn test_change_status_rejects_leaving_terminal_state() {
    let post: Post = post_in_status(PostStatus::Completed);

    let result: Result<Vec<EventPayload>, CoreError> =
        handle_post(&post, change_status_command(PostStatus::Processing));

    match result {
        Err(CoreError::DomainViolation(DomainError::InvalidStatusTransition {
            from, reason, ..
        })) => {
            assert_eq!(from, "completed");
            assert_eq!(reason, "status is terminal");
        }
        other => panic!("expected InvalidStatusTransition, got {other:?}"),
    }
}

#[test]
fn test_change_status_rejects_failed_to_processing() {
    let post: Post = post_in_status(PostStatus::Failed);

    let result: Result<Vec<EventPayload>, CoreError> =
        handle_post(&post, change_status_command(PostStatus::Processing));

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidStatusTransition { .. }
        ))
    ));
}

// ============================================================================
// Guards
// ============================================================================

#[test]
fn test_change_status_requires_created_post() {
    let post: Post = Post::default();

    let result: Result<Vec<EventPayload>, CoreError> =
        handle_post(&post, change_status_command(PostStatus::Processing));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::PostNotFound))
    );
}

#[test]
fn test_change_status_rejects_blank_user() {
    let post: Post = create_test_post(&[]);
    let command: PostCommand = PostCommand::ChangeStatus {
        post_id: String::from("post-41"),
        new_status: PostStatus::Processing,
        user_id: UserId::new(""),
    };

    let result: Result<Vec<EventPayload>, CoreError> = handle_post(&post, command);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::EmptyUserId))
    );
}
