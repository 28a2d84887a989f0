// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AggregateId, AggregateKind, EventPayload, RecordedEvent};
use lumen_tags_domain::{PostStatus, Tag, TagCategory, UserId};
use time::macros::datetime;

fn general_tag(value: &str) -> Tag {
    Tag::new(TagCategory::General, value).unwrap()
}

#[test]
fn test_payload_kind_names() {
    let payload: EventPayload = EventPayload::PostCreated {
        user_id: UserId::new("curator-7"),
        title: String::from("Morning haze"),
        tags: vec![general_tag("landscape")],
    };
    assert_eq!(payload.kind(), "PostCreated");

    let payload: EventPayload = EventPayload::TagAdded {
        tag: general_tag("landscape"),
    };
    assert_eq!(payload.kind(), "TagAdded");

    let payload: EventPayload = EventPayload::UserRegistered {
        display_name: String::from("Curator Seven"),
    };
    assert_eq!(payload.kind(), "UserRegistered");
}

#[test]
fn test_payload_serialization_round_trip() {
    let payload: EventPayload = EventPayload::TagMigrated {
        user_id: UserId::new("curator-7"),
        source_tag: general_tag("nightsky"),
        target_tag: general_tag("night sky"),
    };

    let json: String = serde_json::to_string(&payload).unwrap();
    let restored: EventPayload = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, payload);
}

#[test]
fn test_payload_serialization_is_tagged() {
    let payload: EventPayload = EventPayload::StatusChanged {
        post_id: String::from("post-41"),
        new_status: PostStatus::Processing,
        user_id: UserId::new("curator-7"),
    };

    let json: String = serde_json::to_string(&payload).unwrap();

    assert!(json.contains("\"type\":\"StatusChanged\""));
    assert!(json.contains("\"new_status\":\"processing\""));
}

#[test]
fn test_aggregate_id_constructors() {
    let post: AggregateId = AggregateId::post("post-41");
    let collection: AggregateId = AggregateId::collection("col-3");
    let user: AggregateId = AggregateId::user("curator-7");

    assert_eq!(post.kind(), AggregateKind::Post);
    assert_eq!(post.key(), "post-41");
    assert_eq!(collection.kind(), AggregateKind::Collection);
    assert_eq!(user.kind(), AggregateKind::User);
}

#[test]
fn test_aggregate_id_display() {
    let post: AggregateId = AggregateId::post("post-41");

    assert_eq!(post.to_string(), "post:post-41");
}

#[test]
fn test_aggregate_ids_partition_by_kind() {
    let post: AggregateId = AggregateId::post("shared-key");
    let collection: AggregateId = AggregateId::collection("shared-key");

    assert_ne!(post, collection);
}

#[test]
fn test_recorded_event_carries_envelope_fields() {
    let event: RecordedEvent = RecordedEvent::new(
        AggregateId::post("post-41"),
        3,
        datetime!(2026-08-01 12:00 UTC),
        EventPayload::TagAdded {
            tag: general_tag("landscape"),
        },
    );

    assert_eq!(event.aggregate_id, AggregateId::post("post-41"));
    assert_eq!(event.version, 3);
    assert_eq!(event.recorded_at, datetime!(2026-08-01 12:00 UTC));
    assert_eq!(event.payload.kind(), "TagAdded");
}
