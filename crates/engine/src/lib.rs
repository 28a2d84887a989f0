// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tag migration engine for the Lumen Gallery tagging system.
//!
//! This crate owns the write-side workflow that retires one tag in favor
//! of another. [`MigrationEngine`] runs the full migration — conflict
//! check, record persistence, upstream chain repair, and batched
//! propagation to every tagged post — while [`TagResolver`] applies the
//! resulting records to incoming tag lists so retired tags are replaced
//! before commands ever see them.
//!
//! The engine talks to storage exclusively through the contracts in
//! `lumen-tags-store`; any backend implementing them can sit behind it.

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

mod cancel;
mod error;
mod migrate;
mod resolver;

#[cfg(test)]
mod tests;

// Re-export public types
pub use cancel::CancelToken;
pub use error::EngineError;
pub use migrate::{
    DEFAULT_BATCH_SIZE, MigrationEngine, MigrationOutcome, MigrationRequest, MigrationSettings,
};
pub use resolver::TagResolver;
