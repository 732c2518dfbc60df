//! Response helpers for bookmark routes.

use crate::model::Bookmark;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

/// Path of a single bookmark, used for the `Location` header.
pub fn bookmark_location(bookmark: &Bookmark) -> String {
    format!("/bookmarks/{}", bookmark.id)
}

pub fn ok_one(bookmark: Bookmark) -> (StatusCode, Json<Bookmark>) {
    (StatusCode::OK, Json(bookmark))
}

pub fn ok_many(bookmarks: Vec<Bookmark>) -> (StatusCode, Json<Vec<Bookmark>>) {
    (StatusCode::OK, Json(bookmarks))
}

/// 201 with `Location: /bookmarks/{id}` and the bookmark as body.
pub fn created(bookmark: Bookmark) -> Response {
    let location = bookmark_location(&bookmark);
    let mut response = (StatusCode::CREATED, Json(bookmark)).into_response();
    // A UUID path is always a valid header value.
    if let Ok(value) = HeaderValue::from_str(&location) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response
}
