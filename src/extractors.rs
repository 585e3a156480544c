//! Custom Axum extractors that validate input before a handler runs.
//!
//! Each extractor turns framework rejections into [`AppError::Validation`],
//! so every malformed request gets the same 422 body shape.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde_json::{Map, Value};

use crate::{
    error::AppError,
    models::{
        account::{AccountCandidate, AccountFilter, AccountFilterParams, NewAccount},
        pagination::{Page, PageParams},
        validation::ValidationError,
    },
    state::AppState,
};

/// Extract and validate a create-account JSON body.
pub struct ValidAccount(pub NewAccount);

impl<S> FromRequest<S> for ValidAccount
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // A map only deserializes from a JSON object, so arrays and scalars are rejected here
        let Json(object) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::field("body", rejection.body_text()))?;

        Ok(Self(AccountCandidate::from(object).validate()?))
    }
}

/// Extract and validate `?limit=&skip=&user_id=` for account listings.
///
/// `limit` is clamped to the configured page size.
pub struct ValidListQuery {
    pub filter: AccountFilter,
    pub page: Page,
}

impl FromRequestParts<AppState> for ValidListQuery {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(page) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationError::field("query", rejection.body_text()))?;
        let Query(filter) = Query::<AccountFilterParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationError::field("query", rejection.body_text()))?;

        let (page, filter) =
            ValidationError::zip(page.validate(state.max_page_size), filter.validate())?;

        Ok(Self { filter, page })
    }
}

/// Extract an integer account id from the path.
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ValidationError::field("id", "must be an integer"))?;

        Ok(Self(id))
    }
}
