// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod aggregate;
mod collection;
mod command;
mod error;
mod handle;
mod post;
mod user;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use aggregate::{Aggregate, reconstruct};
pub use collection::Collection;
pub use command::{CollectionCommand, PostCommand};
pub use error::CoreError;
pub use handle::{handle_collection, handle_post};
pub use post::{Comment, Post};
pub use user::UserProfile;
