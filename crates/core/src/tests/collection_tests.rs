// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_user, general_tag};
use crate::{Collection, CollectionCommand, CoreError, handle_collection, reconstruct};
use lumen_tags_domain::{DomainError, MAX_COLLECTION_NAME_LENGTH, Tag, UserId};
use lumen_tags_events::{AggregateId, EventPayload, RecordedEvent};
use std::collections::HashSet;
use time::macros::datetime;

fn collection_event(version: u64, payload: EventPayload) -> RecordedEvent {
    let recorded_at: time::OffsetDateTime = datetime!(2026-08-02 09:00 UTC)
        + time::Duration::minutes(i64::try_from(version).unwrap());
    RecordedEvent::new(AggregateId::collection("col-9"), version, recorded_at, payload)
}

fn create_test_collection(tags: &[Tag]) -> Collection {
    let events: Vec<RecordedEvent> = vec![collection_event(
        1,
        EventPayload::CollectionCreated {
            user_id: create_test_user(),
            name: String::from("Dawn studies"),
            description: Some(String::from("early light experiments")),
        },
    )];
    let mut collection: Collection = reconstruct(&events);
    for tag in tags {
        collection.tags.insert(tag.clone());
    }
    collection
}

// ============================================================================
// Collection creation
// ============================================================================

#[test]
fn test_create_collection_emits_created_event() {
    let collection: Collection = Collection::default();
    let command: CollectionCommand = CollectionCommand::CreateCollection {
        user_id: create_test_user(),
        name: String::from("  Dawn studies  "),
        description: None,
    };

    let events: Vec<EventPayload> = handle_collection(&collection, command).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        EventPayload::CollectionCreated {
            user_id: create_test_user(),
            name: String::from("Dawn studies"),
            description: None,
        }
    );
}

#[test]
fn test_create_collection_rejects_blank_name() {
    let collection: Collection = Collection::default();
    let command: CollectionCommand = CollectionCommand::CreateCollection {
        user_id: create_test_user(),
        name: String::from("   "),
        description: None,
    };

    let result: Result<Vec<EventPayload>, CoreError> = handle_collection(&collection, command);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidCollectionName(_)
        ))
    ));
}

#[test]
fn test_create_collection_rejects_overlong_name() {
    let collection: Collection = Collection::default();
    let command: CollectionCommand = CollectionCommand::CreateCollection {
        user_id: create_test_user(),
        name: "n".repeat(MAX_COLLECTION_NAME_LENGTH + 1),
        description: None,
    };

    let result: Result<Vec<EventPayload>, CoreError> = handle_collection(&collection, command);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidCollectionName(_)
        ))
    ));
}

#[test]
fn test_create_collection_rejects_blank_user() {
    let collection: Collection = Collection::default();
    let command: CollectionCommand = CollectionCommand::CreateCollection {
        user_id: UserId::new("  "),
        name: String::from("Dawn studies"),
        description: None,
    };

    let result: Result<Vec<EventPayload>, CoreError> = handle_collection(&collection, command);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::EmptyUserId))
    );
}

#[test]
fn test_create_collection_rejects_already_created() {
    let collection: Collection = create_test_collection(&[]);
    let command: CollectionCommand = CollectionCommand::CreateCollection {
        user_id: create_test_user(),
        name: String::from("Second take"),
        description: None,
    };

    let result: Result<Vec<EventPayload>, CoreError> = handle_collection(&collection, command);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::CollectionAlreadyCreated
        ))
    );
}

// ============================================================================
// Tagging shares the post semantics
// ============================================================================

#[test]
fn test_collection_add_tags_rejects_duplicates() {
    let existing: Tag = general_tag("landscape");
    let collection: Collection = create_test_collection(&[existing.clone()]);
    let command: CollectionCommand = CollectionCommand::AddTags {
        tags: vec![existing],
    };

    let result: Result<Vec<EventPayload>, CoreError> = handle_collection(&collection, command);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::NoNewTags {
            requested: 1
        }))
    );
}

#[test]
fn test_collection_add_tags_emits_for_new_subset() {
    let collection: Collection = create_test_collection(&[general_tag("landscape")]);
    let command: CollectionCommand = CollectionCommand::AddTags {
        tags: vec![general_tag("landscape"), general_tag("sunrise")],
    };

    let events: Vec<EventPayload> = handle_collection(&collection, command).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        EventPayload::TagAdded {
            tag: general_tag("sunrise")
        }
    );
}

#[test]
fn test_collection_remove_tags_rejects_when_none_present() {
    let collection: Collection = create_test_collection(&[general_tag("landscape")]);
    let command: CollectionCommand = CollectionCommand::RemoveTags {
        tags: vec![general_tag("sunrise")],
    };

    let result: Result<Vec<EventPayload>, CoreError> = handle_collection(&collection, command);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::NoTagsToRemove {
            requested: 1
        }))
    );
}

#[test]
fn test_collection_tagging_requires_created_collection() {
    let collection: Collection = Collection::default();
    let command: CollectionCommand = CollectionCommand::AddTags {
        tags: vec![general_tag("landscape")],
    };

    let result: Result<Vec<EventPayload>, CoreError> = handle_collection(&collection, command);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::CollectionNotFound))
    );
}

// ============================================================================
// Replay applies migrations to collections too
// ============================================================================

#[test]
fn test_collection_migration_replaces_source_with_target() {
    let tag_a: Tag = general_tag("nightsky");
    let tag_b: Tag = general_tag("stars");
    let tag_c: Tag = general_tag("night sky");
    let events: Vec<RecordedEvent> = vec![
        collection_event(
            1,
            EventPayload::CollectionCreated {
                user_id: create_test_user(),
                name: String::from("Dawn studies"),
                description: None,
            },
        ),
        collection_event(2, EventPayload::TagAdded { tag: tag_a.clone() }),
        collection_event(3, EventPayload::TagAdded { tag: tag_b.clone() }),
        collection_event(
            4,
            EventPayload::TagMigrated {
                user_id: create_test_user(),
                source_tag: tag_a.clone(),
                target_tag: tag_c.clone(),
            },
        ),
    ];

    let collection: Collection = reconstruct(&events);

    let expected: HashSet<Tag> = [tag_c, tag_b].into_iter().collect();
    assert_eq!(collection.tags, expected);
}

#[test]
fn test_collection_created_sets_audit_fields() {
    let collection: Collection = create_test_collection(&[]);

    assert!(collection.is_created());
    assert_eq!(collection.name, "Dawn studies");
    assert_eq!(
        collection.description,
        Some(String::from("early light experiments"))
    );
    assert_eq!(collection.created_by, Some(create_test_user()));
    assert_eq!(collection.created_at, Some(datetime!(2026-08-02 09:01 UTC)));
}
