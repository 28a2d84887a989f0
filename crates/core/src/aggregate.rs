// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lumen_tags_events::RecordedEvent;

/// The contract shared by all event-sourced aggregates.
///
/// An aggregate's authoritative state is derived by replaying its event
/// stream, never by direct field assignment. `apply` performs no
/// validation: business rules are checked once, at command time, before an
/// event is ever recorded, so replay is a total, always-succeeding fold.
/// Payloads addressed to other aggregate kinds are ignored.
pub trait Aggregate: Default {
    /// Applies one recorded event to this aggregate's state.
    ///
    /// Must be called with events from this aggregate's own stream, in
    /// store-assigned order.
    ///
    /// # Arguments
    ///
    /// * `event` - The recorded event to fold in
    fn apply(&mut self, event: &RecordedEvent);
}

/// Reconstructs an aggregate from its recorded event stream.
///
/// Starts from the aggregate's default (empty) state and applies every
/// event in the order given, which must be the order the store recorded
/// them. An empty stream yields the default aggregate.
///
/// # Arguments
///
/// * `events` - The aggregate's stream, in store-assigned order
#[must_use]
pub fn reconstruct<A: Aggregate>(events: &[RecordedEvent]) -> A {
    let mut aggregate: A = A::default();
    for event in events {
        aggregate.apply(event);
    }
    aggregate
}
