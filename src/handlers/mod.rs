//! HTTP request handlers (route handlers).
//!
//! Input is validated by the extractors in `crate::extractors` before a
//! handler body runs; handlers then call the account store and return JSON.

/// Account endpoints
pub mod accounts;
/// Service health endpoint
pub mod health;
