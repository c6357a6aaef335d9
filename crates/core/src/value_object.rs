//! Value objects: validated attribute values compared by value, not identity.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Trimmed, non-blank text with a maximum length counted in characters.
///
/// Mirrors a `VARCHAR(n) NOT NULL` column: construction fails instead of
/// letting the database reject or truncate the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BoundedText(String);

impl BoundedText {
    /// Validate `value` for the column `field` limited to `max_chars`.
    pub fn new(field: &str, value: impl AsRef<str>, max_chars: usize) -> DomainResult<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(format!("{field} is required")));
        }
        let len = trimmed.chars().count();
        if len > max_chars {
            return Err(DomainError::validation(format!(
                "{field} must be at most {max_chars} characters (got {len})"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Like [`BoundedText::new`], but blank input is `Ok(None)`.
    pub fn optional(field: &str, value: Option<&str>, max_chars: usize) -> DomainResult<Option<Self>> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(v) => Self::new(field, v, max_chars).map(Some),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BoundedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for BoundedText {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
