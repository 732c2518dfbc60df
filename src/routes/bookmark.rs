//! Bookmark CRUD routes.

use crate::handlers::bookmark::{create, delete as delete_handler, list, read};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn bookmark_routes(state: AppState) -> Router {
    Router::new()
        .route("/bookmarks", get(list).post(create))
        .route("/bookmarks/:id", get(read).delete(delete_handler))
        .with_state(state)
}
