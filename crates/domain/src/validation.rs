// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::UserId;

/// Maximum length of a post title, in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length of a collection name, in characters.
pub const MAX_COLLECTION_NAME_LENGTH: usize = 255;

/// Validates a user identifier for use in a command or record factory.
///
/// Ids are checked here rather than at construction so that legacy values
/// rehydrated from storage can still be represented and inspected.
///
/// # Arguments
///
/// * `user_id` - The identifier to validate
///
/// # Returns
///
/// * `Ok(())` if the identifier is non-empty
/// * `Err(DomainError::EmptyUserId)` otherwise
///
/// # Errors
///
/// Returns an error if the identifier is empty after trimming.
pub fn validate_user_id(user_id: &UserId) -> Result<(), DomainError> {
    // Rule: user ids must not be blank
    if user_id.value().is_empty() {
        return Err(DomainError::EmptyUserId);
    }
    Ok(())
}

/// Validates a post title.
///
/// # Arguments
///
/// * `title` - The title to validate
///
/// # Returns
///
/// * `Ok(())` if the title is valid
/// * `Err(DomainError::InvalidTitle)` if it is blank or too long
///
/// # Errors
///
/// Returns an error if the trimmed title is empty or longer than
/// `MAX_TITLE_LENGTH` characters.
pub fn validate_title(title: &str) -> Result<(), DomainError> {
    let trimmed: &str = title.trim();

    // Rule: title must not be empty
    if trimmed.is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be empty",
        )));
    }

    // Rule: title must fit the display column
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(DomainError::InvalidTitle(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Validates comment text.
///
/// # Arguments
///
/// * `text` - The comment text to validate
///
/// # Returns
///
/// * `Ok(())` if the text is non-blank
/// * `Err(DomainError::EmptyComment)` otherwise
///
/// # Errors
///
/// Returns an error if the text is empty after trimming.
pub fn validate_comment_text(text: &str) -> Result<(), DomainError> {
    // Rule: comments must carry visible text
    if text.trim().is_empty() {
        return Err(DomainError::EmptyComment);
    }
    Ok(())
}

/// Validates a collection name.
///
/// # Arguments
///
/// * `name` - The name to validate
///
/// # Returns
///
/// * `Ok(())` if the name is valid
/// * `Err(DomainError::InvalidCollectionName)` if it is blank or too long
///
/// # Errors
///
/// Returns an error if the trimmed name is empty or longer than
/// `MAX_COLLECTION_NAME_LENGTH` characters.
pub fn validate_collection_name(name: &str) -> Result<(), DomainError> {
    let trimmed: &str = name.trim();

    // Rule: collection names must not be empty
    if trimmed.is_empty() {
        return Err(DomainError::InvalidCollectionName(String::from(
            "Name cannot be empty",
        )));
    }

    // Rule: collection names must fit the display column
    if trimmed.chars().count() > MAX_COLLECTION_NAME_LENGTH {
        return Err(DomainError::InvalidCollectionName(format!(
            "Name must be at most {MAX_COLLECTION_NAME_LENGTH} characters"
        )));
    }

    Ok(())
}
