//! Persistence gateway for the `bookmarks` table.

mod memory;
mod postgres;

pub use memory::MemoryBookmarkStore;
pub use postgres::{ensure_bookmarks_table, PgBookmarkStore, BOOKMARKS_TABLE};

use crate::error::AppError;
use crate::model::{BookmarkPatch, NewBookmark, StoredBookmark};
use async_trait::async_trait;
use uuid::Uuid;

/// Single-statement operations on bookmark rows.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All rows in storage order.
    async fn list_all(&self) -> Result<Vec<StoredBookmark>, AppError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<StoredBookmark>, AppError>;

    /// Assigns a fresh id, inserts, and returns the persisted row.
    async fn create(&self, record: NewBookmark) -> Result<StoredBookmark, AppError>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete_by_id(&self, id: Uuid) -> Result<u64, AppError>;

    /// Writes the fields present in `patch`. Returns the updated row, or None if no row matched.
    async fn update(&self, id: Uuid, patch: BookmarkPatch) -> Result<Option<StoredBookmark>, AppError>;

    /// Readiness check.
    async fn ping(&self) -> Result<(), AppError>;
}
