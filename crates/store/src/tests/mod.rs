// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use lumen_tags_domain::{Tag, TagCategory, UserId};
use lumen_tags_events::{EventPayload, MigrationRecord};

pub fn general_tag(value: &str) -> Tag {
    Tag::new(TagCategory::General, value).unwrap()
}

pub fn create_test_user() -> UserId {
    UserId::new("curator-7")
}

pub fn create_test_migration(source: &str, target: &str) -> MigrationRecord {
    MigrationRecord::new(create_test_user(), general_tag(source), general_tag(target)).unwrap()
}

pub fn post_created(tags: &[Tag]) -> EventPayload {
    EventPayload::PostCreated {
        user_id: create_test_user(),
        title: String::from("Morning haze"),
        tags: tags.to_vec(),
    }
}
