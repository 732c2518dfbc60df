//! Bookmark handlers: list, create, read, delete.

use crate::error::AppError;
use crate::extractors::ResolvedBookmark;
use crate::response::{created, ok_many, ok_one};
use crate::service::{serialize_bookmark, serialize_bookmarks, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tracing::Level;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list_all().await?;
    Ok(ok_many(serialize_bookmarks(rows)?))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::Rejected {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;
    let Value::Object(body) = body else {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    };
    let record = RequestValidator::validate_new(&body).map_err(|err| {
        state.logger.record(Level::ERROR, &err.to_string());
        err
    })?;
    let row = state.store.create(record).await?;
    state
        .logger
        .record(Level::INFO, &format!("bookmark with id {} created", row.id));
    Ok(created(serialize_bookmark(row)?))
}

pub async fn read(ResolvedBookmark(row): ResolvedBookmark) -> Result<impl IntoResponse, AppError> {
    Ok(ok_one(serialize_bookmark(row)?))
}

pub async fn delete(
    State(state): State<AppState>,
    ResolvedBookmark(row): ResolvedBookmark,
) -> Result<impl IntoResponse, AppError> {
    if state.store.delete_by_id(row.id).await? == 0 {
        // Removed by another request after it was resolved.
        return Err(AppError::NotFound);
    }
    state
        .logger
        .record(Level::INFO, &format!("bookmark with id {} deleted", row.id));
    Ok(StatusCode::NO_CONTENT)
}
