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

mod error;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use status::PostStatus;
pub use types::{Tag, TagCategory, UserId};
pub use validation::{
    MAX_COLLECTION_NAME_LENGTH, MAX_TITLE_LENGTH, validate_collection_name, validate_comment_text,
    validate_title, validate_user_id,
};
