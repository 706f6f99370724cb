//! Validation rules for project names.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{ReplaceError, Result};
use crate::template::{BASE_TOKEN, MAX_NAME_LENGTH};
use std::fmt;

/// A project name that passed [`validate_project_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: &str) -> Result<Self> {
        validate_project_name(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates a new project name.
///
/// ## Rules
/// - Not empty
/// - Starts with an ASCII letter
/// - Contains only `[a-zA-Z0-9_-]`
/// - At most 50 characters
///
/// ## Warnings (non-fatal)
/// - Contains the placeholder itself (a second run would rewrite it again)
/// - Mixing `_` and `-`
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ReplaceError::InvalidName(
            name.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    let first = name.chars().next().unwrap_or_default();
    if !first.is_ascii_alphabetic() {
        return Err(ReplaceError::InvalidName(
            name.to_string(),
            "must start with a letter".to_string(),
        ));
    }

    for (idx, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' && ch != '-' {
            return Err(ReplaceError::InvalidName(
                name.to_string(),
                format!(
                    "invalid character '{}' at position {}; only letters, numbers, hyphens, and underscores are allowed",
                    ch, idx
                ),
            ));
        }
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ReplaceError::InvalidName(
            name.to_string(),
            format!(
                "too long (max {} characters, has {})",
                MAX_NAME_LENGTH,
                name.len()
            ),
        ));
    }

    if name.contains(BASE_TOKEN) {
        log::warn!(
            "'{}' contains '{}'; running the replacement again would rewrite it",
            name,
            BASE_TOKEN
        );
    }

    if name.contains('_') && name.contains('-') {
        log::warn!("'{}' mixes _ and -", name);
    }

    Ok(())
}
