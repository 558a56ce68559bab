//! Accumulated validation.

use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Records `msg` when `value` is empty or whitespace.
    pub(crate) fn require_non_empty(&mut self, name: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(format!("{name} must not be empty"));
        }
    }

    /// `Ok(())` if nothing was recorded, otherwise one error joining all
    /// messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}
