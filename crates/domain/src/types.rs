// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the category a tag belongs to.
///
/// Categories partition the tag namespace: the same value may exist
/// independently under different categories (e.g. an artist and a series
/// sharing a name), and two tags are only comparable within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    /// The creator of the work.
    Artist,
    /// A character depicted in the work.
    Character,
    /// The series or franchise the work belongs to.
    Series,
    /// Free-form descriptive tags. The default category.
    #[default]
    General,
    /// Tags about the post itself rather than its content.
    Meta,
}

impl FromStr for TagCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for TagCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TagCategory {
    /// Converts this category to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Character => "character",
            Self::Series => "series",
            Self::General => "general",
            Self::Meta => "meta",
        }
    }

    /// Parses a category from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - The category string (e.g. "artist", "general")
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTagCategory` if the string does not name
    /// a known category.
    pub fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "artist" => Ok(Self::Artist),
            "character" => Ok(Self::Character),
            "series" => Ok(Self::Series),
            "general" => Ok(Self::General),
            "meta" => Ok(Self::Meta),
            _ => Err(DomainError::InvalidTagCategory(s.to_string())),
        }
    }
}

/// Represents a single tag: a category plus a normalized text value.
///
/// Tags are immutable once constructed and compare by (category, value),
/// which makes them usable both as set members on an aggregate and as map
/// keys for migration lookup. The value is stored trimmed; comparison is
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// The category this tag belongs to.
    category: TagCategory,
    /// The tag text, trimmed of surrounding whitespace.
    value: String,
}

impl Tag {
    /// Minimum length of a tag value after trimming, in characters.
    pub const MIN_VALUE_LENGTH: usize = 3;

    /// Maximum length of a tag value after trimming, in characters.
    pub const MAX_VALUE_LENGTH: usize = 255;

    /// Creates a new `Tag`, validating the value.
    ///
    /// The value is trimmed before validation and stored trimmed.
    ///
    /// # Arguments
    ///
    /// * `category` - The category the tag belongs to
    /// * `value` - The tag text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyTag` if the trimmed value is empty,
    /// `DomainError::TagTooShort` or `DomainError::TagTooLong` if its length
    /// falls outside `[MIN_VALUE_LENGTH, MAX_VALUE_LENGTH]`.
    pub fn new(category: TagCategory, value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyTag);
        }
        let length: usize = trimmed.chars().count();
        if length < Self::MIN_VALUE_LENGTH {
            return Err(DomainError::TagTooShort { length });
        }
        if length > Self::MAX_VALUE_LENGTH {
            return Err(DomainError::TagTooLong { length });
        }
        Ok(Self {
            category,
            value: trimmed.to_string(),
        })
    }

    /// Returns the category this tag belongs to.
    #[must_use]
    pub const fn category(&self) -> TagCategory {
        self.category
    }

    /// Returns the tag text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.category.as_str(), self.value)
    }
}

/// Represents a user identifier supplied by the surrounding system.
///
/// User ids are opaque to this core: they are carried on events and
/// migration records for attribution, never resolved to accounts here.
/// The value is stored trimmed; blank ids are caught by
/// [`validate_user_id`](crate::validate_user_id) at command time rather
/// than at construction, so that ids rehydrated from legacy storage can
/// still be represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId {
    /// The identifier value, trimmed of surrounding whitespace.
    value: String,
}

impl UserId {
    /// Creates a new `UserId`, trimming surrounding whitespace.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
