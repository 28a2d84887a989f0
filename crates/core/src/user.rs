// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregate::Aggregate;
use lumen_tags_events::{EventPayload, RecordedEvent};
use time::OffsetDateTime;

/// The user profile aggregate, reconstructed from its event stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    /// The user's display name.
    pub display_name: String,
    /// When the registration event was recorded (UTC).
    pub registered_at: Option<OffsetDateTime>,
    /// When the latest applied event was recorded (UTC).
    pub last_modified: Option<OffsetDateTime>,
}

impl UserProfile {
    /// Returns whether the profile has been registered.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.registered_at.is_some()
    }
}

impl Aggregate for UserProfile {
    fn apply(&mut self, event: &RecordedEvent) {
        match &event.payload {
            EventPayload::UserRegistered { display_name } => {
                self.display_name = display_name.clone();
                self.registered_at = Some(event.recorded_at);
            }
            // Events for other aggregate kinds are ignored during replay.
            EventPayload::PostCreated { .. }
            | EventPayload::TagAdded { .. }
            | EventPayload::TagRemoved { .. }
            | EventPayload::TagMigrated { .. }
            | EventPayload::StatusChanged { .. }
            | EventPayload::CommentAdded { .. }
            | EventPayload::CollectionCreated { .. } => {}
        }
        self.last_modified = Some(event.recorded_at);
    }
}
