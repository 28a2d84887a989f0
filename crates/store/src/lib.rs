// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage layer for the Lumen Gallery tagging system.
//!
//! This crate defines the three contracts the tagging engine reaches
//! storage through — ordered event streams, the migration record table,
//! and the post-by-tag query — plus an in-memory backend implementing
//! all three.
//!
//! The contracts deliberately say nothing about the backing technology.
//! Stream versions and recording timestamps are assigned by the store at
//! append time; callers never choose either. The bundled
//! [`InMemoryStore`] keeps payloads in their serialized form so tests
//! exercise the same wire path a document store would.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod event_store;
mod memory;
mod migration_store;
mod post_query;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::StoreError;
pub use event_store::{EventStore, StreamWindow};
pub use memory::InMemoryStore;
pub use migration_store::MigrationStore;
pub use post_query::PostQuery;
