// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Post, reconstruct};
use lumen_tags_domain::{Tag, TagCategory, UserId};
use lumen_tags_events::{AggregateId, EventPayload, RecordedEvent};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

pub fn create_test_user() -> UserId {
    UserId::new("curator-7")
}

pub fn general_tag(value: &str) -> Tag {
    Tag::new(TagCategory::General, value).unwrap()
}

pub fn artist_tag(value: &str) -> Tag {
    Tag::new(TagCategory::Artist, value).unwrap()
}

/// Builds a recorded event on the shared test post stream.
///
/// Timestamps advance one minute per version so audit-field assertions
/// can distinguish events.
pub fn recorded(version: u64, payload: EventPayload) -> RecordedEvent {
    let base: OffsetDateTime = datetime!(2026-08-01 12:00 UTC);
    let offset: Duration = Duration::minutes(i64::try_from(version).unwrap());
    RecordedEvent::new(AggregateId::post("post-41"), version, base + offset, payload)
}

/// Reconstructs a post created with the given tags.
pub fn create_test_post(tags: &[Tag]) -> Post {
    let events: Vec<RecordedEvent> = vec![recorded(
        1,
        EventPayload::PostCreated {
            user_id: create_test_user(),
            title: String::from("Morning haze"),
            tags: tags.to_vec(),
        },
    )];
    reconstruct(&events)
}
