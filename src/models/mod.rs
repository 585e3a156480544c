//! Data models representing database entities and validated input.

/// Account entity and create-request validation
pub mod account;
/// Offset pagination window
pub mod pagination;
/// Field-level validation errors
pub mod validation;
