//! Validation error types shared by request bodies and query strings.

use serde::Serialize;
use std::fmt;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field (`body` when the payload itself is unusable)
    pub field: &'static str,

    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Rejection of untrusted input, carrying one entry per failing field.
///
/// Always holds at least one [`FieldError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Build an error for a single field.
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        FieldError::new(field, message).into()
    }

    /// Field-level details, in the order they were detected.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Combine two independently checked results.
    ///
    /// Both values are returned only if both checks passed; otherwise the
    /// errors of every failed side are kept, left before right.
    pub fn zip<A, B>(
        a: Result<A, impl Into<ValidationError>>,
        b: Result<B, impl Into<ValidationError>>,
    ) -> Result<(A, B), ValidationError> {
        match (a.map_err(Into::into), b.map_err(Into::into)) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
            (Err(mut left), Err(right)) => {
                left.errors.extend(right.errors);
                Err(left)
            }
        }
    }
}

impl From<FieldError> for ValidationError {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}
