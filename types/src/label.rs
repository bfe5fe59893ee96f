//! Validated item labels.
//!
//! A [`Label`] is never empty after trimming. Validation happens once at
//! construction, so everything downstream can assume the content is valid.

use thiserror::Error;

/// Non-empty, trimmed item text.
///
/// # Invariants
///
/// - Content is non-empty after `trim()`
/// - Leading/trailing whitespace is stripped at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(String);

#[derive(Debug, Error)]
#[error("item label must not be empty")]
pub struct EmptyLabelError;

impl Label {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyLabelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(EmptyLabelError)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Label {
    type Error = EmptyLabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
