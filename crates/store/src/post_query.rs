// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use futures::stream::BoxStream;
use lumen_tags_domain::Tag;
use lumen_tags_events::AggregateId;

/// Read-side lookup of posts by tag.
///
/// This is the query surface migration propagation walks: it answers
/// "which post streams currently carry this tag" without loading any
/// post bodies.
pub trait PostQuery: Send + Sync {
    /// Returns a stream of the ids of every post currently tagged with
    /// `tag`.
    ///
    /// The stream is lazy — no work happens until it is polled — and
    /// each call produces a fresh, restartable stream. Order is backend
    /// defined but stable for an unchanged data set.
    ///
    /// # Arguments
    ///
    /// * `tag` - The tag to look up
    fn stream_posts_with_tag(&self, tag: &Tag)
    -> BoxStream<'static, Result<AggregateId, StoreError>>;
}
