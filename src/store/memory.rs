//! In-process store. Keeps insertion order; used by tests and local runs without a database.

use super::BookmarkStore;
use crate::error::AppError;
use crate::model::{BookmarkPatch, NewBookmark, StoredBookmark};
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct MemoryBookmarkStore {
    rows: RwLock<Vec<StoredBookmark>>,
}

impl MemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with rows as they would exist at rest, including non-integer rating representations.
    pub fn with_rows(rows: Vec<StoredBookmark>) -> Self {
        MemoryBookmarkStore {
            rows: RwLock::new(rows),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<StoredBookmark>>, AppError> {
        self.rows
            .read()
            .map_err(|_| AppError::Internal("bookmark store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<StoredBookmark>>, AppError> {
        self.rows
            .write()
            .map_err(|_| AppError::Internal("bookmark store lock poisoned".into()))
    }
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn list_all(&self) -> Result<Vec<StoredBookmark>, AppError> {
        Ok(self.read()?.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<StoredBookmark>, AppError> {
        Ok(self.read()?.iter().find(|b| b.id == id).cloned())
    }

    async fn create(&self, record: NewBookmark) -> Result<StoredBookmark, AppError> {
        let row = record.into_stored(Uuid::new_v4());
        self.write()?.push(row.clone());
        Ok(row)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, AppError> {
        let mut rows = self.write()?;
        let before = rows.len();
        rows.retain(|b| b.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn update(&self, id: Uuid, patch: BookmarkPatch) -> Result<Option<StoredBookmark>, AppError> {
        let mut rows = self.write()?;
        let Some(row) = rows.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        patch.apply(row);
        Ok(Some(row.clone()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}
