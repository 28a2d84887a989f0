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
    clippy::all
)]

mod envelope;
mod migration;
mod payload;

#[cfg(test)]
mod tests;

// Re-export public types
pub use envelope::{AggregateId, AggregateKind, RecordedEvent};
pub use migration::MigrationRecord;
pub use payload::EventPayload;
