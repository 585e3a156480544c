//! Account HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /accounts - Create new account
//! - GET /accounts?limit=&skip=&user_id= - List accounts page by page
//! - GET /accounts/{id} - Get account by ID

use crate::{
    error::AppError,
    extractors::{ValidAccount, ValidId, ValidListQuery},
    models::account::Account,
    state::AppState,
};
use axum::{Json, extract::State};

/// Create a new account.
///
/// # Endpoint
///
/// `POST /accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "user_id": 42,
///   "balance": "100.25"
/// }
/// ```
///
/// `balance` may also be a JSON number.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the created account
/// - **Error (422)**: Missing or mistyped field; nothing is written
/// - **Error (500)**: Database error
///
/// ```json
/// {
///   "id": 1,
///   "user_id": 42,
///   "balance": "100.25",
///   "created_at": "2025-12-20T10:00:00Z"
/// }
/// ```
pub async fn create_account(
    State(state): State<AppState>,
    ValidAccount(new_account): ValidAccount,
) -> Result<Json<Account>, AppError> {
    let account = state.store.create(new_account).await?;

    tracing::info!(account_id = account.id, user_id = account.user_id, "Account created");

    Ok(Json(account))
}

/// List accounts with offset pagination.
///
/// # Endpoint
///
/// `GET /accounts?limit=2&skip=0`
///
/// # Query Parameters
///
/// - `limit` (required): page size, > 0, clamped to `MAX_PAGE_SIZE`
/// - `skip` (optional): rows to skip, >= 0, defaults to 0
/// - `user_id` (optional): only accounts owned by this user
///
/// # Ordering
///
/// Ascending by `id`, which is creation order.
///
/// # Response
///
/// - **Success (200 OK)**: Array of accounts (may be empty)
/// - **Error (422)**: `limit` missing or invalid, `skip` or `user_id` invalid
pub async fn list_accounts(
    State(state): State<AppState>,
    ValidListQuery { filter, page }: ValidListQuery,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.store.list(filter, page).await?;

    Ok(Json(accounts))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Returns account details
/// - **Error (404)**: No account with that id
/// - **Error (422)**: Id is not an integer
pub async fn get_account(
    State(state): State<AppState>,
    ValidId(account_id): ValidId,
) -> Result<Json<Account>, AppError> {
    let account = state
        .store
        .get(account_id)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(account))
}
