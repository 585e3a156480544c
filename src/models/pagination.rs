//! Offset pagination for list endpoints.

use serde::Deserialize;

use super::validation::{FieldError, ValidationError};

/// Raw `?limit=&skip=` query parameters.
///
/// Values stay as strings so a non-integer is reported against its field
/// instead of as a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub limit: Option<String>,
    pub skip: Option<String>,
}

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Rows to skip (SQL OFFSET), never negative
    pub skip: i64,
    /// Rows to return (SQL LIMIT), within `1..=max_page_size`
    pub limit: i64,
}

impl PageParams {
    /// Validate into a [`Page`].
    ///
    /// - `limit` is required and must be > 0; values above `max_page_size`
    ///   are clamped down to it
    /// - `skip` defaults to 0 and must be >= 0
    pub fn validate(&self, max_page_size: i64) -> Result<Page, ValidationError> {
        let limit = match self.limit.as_deref() {
            None => Err(FieldError::new("limit", "field required")),
            Some(raw) => parse_int("limit", raw).and_then(|n| {
                if n > 0 {
                    Ok(n.min(max_page_size.max(1)))
                } else {
                    Err(FieldError::new("limit", "must be greater than 0"))
                }
            }),
        };

        let skip = match self.skip.as_deref() {
            None => Ok(0),
            Some(raw) => parse_int("skip", raw).and_then(|n| {
                if n >= 0 {
                    Ok(n)
                } else {
                    Err(FieldError::new("skip", "must be greater than or equal to 0"))
                }
            }),
        };

        let (limit, skip) = ValidationError::zip(limit, skip)?;

        Ok(Page { skip, limit })
    }
}

fn parse_int(field: &'static str, raw: &str) -> Result<i64, FieldError> {
    raw.parse::<i64>()
        .map_err(|_| FieldError::new(field, "must be an integer"))
}
