//! Persistence services.
//!
//! Services own the SQL; handlers only validate input and shape responses.

pub mod account_store;
