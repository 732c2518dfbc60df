//! Bookmarks API: CRUD REST service for bookmark records.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logger;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use logger::{Logger, MemoryLogger, TracingLogger};
pub use model::{Bookmark, BookmarkPatch, NewBookmark, StoredBookmark, StoredRating};
pub use routes::{app, bookmark_routes, common_routes};
pub use state::AppState;
pub use store::{ensure_bookmarks_table, BookmarkStore, MemoryBookmarkStore, PgBookmarkStore};
