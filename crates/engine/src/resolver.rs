// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lumen_tags_domain::Tag;
use lumen_tags_events::MigrationRecord;
use lumen_tags_store::{MigrationStore, StoreError};
use std::sync::Arc;

/// Rewrites requested tags through the active migration table.
///
/// Resolution sits in front of command handling: tags arriving on new
/// posts or tagging requests pass through here first, so retired tags
/// are silently replaced by their successors before any validation or
/// event production happens.
#[derive(Clone)]
pub struct TagResolver {
    migrations: Arc<dyn MigrationStore>,
}

impl TagResolver {
    /// Creates a resolver over the given migration table.
    ///
    /// # Arguments
    ///
    /// * `migrations` - The migration record table to consult
    #[must_use]
    pub fn new(migrations: Arc<dyn MigrationStore>) -> Self {
        Self { migrations }
    }

    /// Resolves each tag through the migration table.
    ///
    /// Each tag is looked up by source, sequentially and in input order.
    /// A tag with an active migration is replaced by that migration's
    /// target; a tag without one passes through unchanged. Order and
    /// duplicates are preserved, and each tag takes exactly one hop —
    /// chain repair keeps every stored mapping terminal, so a single
    /// lookup lands on the final tag.
    ///
    /// # Arguments
    ///
    /// * `tags` - The tags to resolve, in request order
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if a lookup fails.
    pub async fn resolve(&self, tags: Vec<Tag>) -> Result<Vec<Tag>, StoreError> {
        let mut resolved: Vec<Tag> = Vec::with_capacity(tags.len());
        for tag in tags {
            let mapped: Option<MigrationRecord> = self.migrations.find_by_source(&tag).await?;
            resolved.push(mapped.map_or(tag, |record| record.target_tag().clone()));
        }
        Ok(resolved)
    }
}
