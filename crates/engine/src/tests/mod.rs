// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::MigrationEngine;
use lumen_tags::Post;
use lumen_tags_domain::{Tag, TagCategory, UserId};
use lumen_tags_events::{AggregateId, EventPayload, RecordedEvent};
use lumen_tags_store::{EventStore, InMemoryStore};
use std::collections::HashSet;
use std::sync::Arc;

/// Routes engine logs to the test harness. Safe to call from every
/// test; only the first call in a process installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn general_tag(value: &str) -> Tag {
    Tag::new(TagCategory::General, value).unwrap()
}

pub fn create_test_user() -> UserId {
    UserId::new("curator-7")
}

/// Builds an engine whose three storage seams all share `store`.
pub fn engine_over(store: &InMemoryStore) -> MigrationEngine {
    MigrationEngine::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    )
}

pub async fn seed_post(store: &InMemoryStore, key: &str, tags: &[Tag]) {
    store
        .append_to_stream(
            &AggregateId::post(key),
            EventPayload::PostCreated {
                user_id: create_test_user(),
                title: format!("Post {key}"),
                tags: tags.to_vec(),
            },
        )
        .await
        .unwrap();
}

/// Reads a post's stream back and folds it, returning the tag set the
/// post currently carries.
pub async fn post_tags(store: &InMemoryStore, key: &str) -> HashSet<Tag> {
    let events: Vec<RecordedEvent> = store.read_stream(&AggregateId::post(key)).await.unwrap();
    let post: Post = lumen_tags::reconstruct(&events);
    post.tags
}
