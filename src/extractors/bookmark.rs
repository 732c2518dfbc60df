//! Resolve the `:id` path segment to a stored bookmark before the handler runs.

use crate::error::AppError;
use crate::model::StoredBookmark;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// A bookmark that existed when the request was routed. Rejects with 404 otherwise.
#[derive(Clone, Debug)]
pub struct ResolvedBookmark(pub StoredBookmark);

#[async_trait]
impl FromRequestParts<AppState> for ResolvedBookmark {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Path(id_str) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        // A malformed id cannot name a stored row.
        let id = Uuid::parse_str(&id_str).map_err(|_| not_found(state, &id_str))?;
        match state.store.get_by_id(id).await? {
            Some(row) => Ok(ResolvedBookmark(row)),
            None => Err(not_found(state, &id_str)),
        }
    }
}

fn not_found(state: &AppState, id: &str) -> AppError {
    state
        .logger
        .record(tracing::Level::ERROR, &format!("Bookmark with id {} not found", id));
    AppError::NotFound
}
