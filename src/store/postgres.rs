//! PostgreSQL-backed store and table bootstrap.

use super::BookmarkStore;
use crate::error::AppError;
use crate::model::{BookmarkPatch, NewBookmark, StoredBookmark, StoredRating};
use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

pub const BOOKMARKS_TABLE: &str = "bookmarks";

const COLUMNS: &str = "id, title, url, description, rating";

/// Create the bookmarks table if it does not exist. Safe to call on every start.
pub async fn ensure_bookmarks_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL,
            url TEXT NOT NULL,
            description TEXT,
            rating SMALLINT NOT NULL CHECK (rating BETWEEN 0 AND 5)
        )
        "#,
        BOOKMARKS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

#[derive(Clone, Debug)]
pub struct PgBookmarkStore {
    pool: PgPool,
}

impl PgBookmarkStore {
    pub fn new(pool: PgPool) -> Self {
        PgBookmarkStore { pool }
    }
}

fn rating_param(rating: i64) -> Result<i16, AppError> {
    i16::try_from(rating).map_err(|_| AppError::Validation("Invalid rating".into()))
}

#[async_trait]
impl BookmarkStore for PgBookmarkStore {
    async fn list_all(&self) -> Result<Vec<StoredBookmark>, AppError> {
        let sql = format!("SELECT {} FROM {}", COLUMNS, BOOKMARKS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, StoredBookmark>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<StoredBookmark>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, BOOKMARKS_TABLE);
        tracing::debug!(sql = %sql, %id, "query");
        let row = sqlx::query_as::<_, StoredBookmark>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, record: NewBookmark) -> Result<StoredBookmark, AppError> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            BOOKMARKS_TABLE, COLUMNS, COLUMNS
        );
        let id = Uuid::new_v4();
        tracing::debug!(sql = %sql, %id, "query");
        let row = sqlx::query_as::<_, StoredBookmark>(&sql)
            .bind(id)
            .bind(&record.title)
            .bind(&record.url)
            .bind(&record.description)
            .bind(rating_param(record.rating)?)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", BOOKMARKS_TABLE);
        tracing::debug!(sql = %sql, %id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn update(&self, id: Uuid, patch: BookmarkPatch) -> Result<Option<StoredBookmark>, AppError> {
        if patch.is_empty() {
            return self.get_by_id(id).await;
        }
        let sql = format!(
            "UPDATE {} SET \
             title = COALESCE($2, title), \
             url = COALESCE($3, url), \
             description = COALESCE($4, description), \
             rating = COALESCE($5, rating) \
             WHERE id = $1 RETURNING {}",
            BOOKMARKS_TABLE, COLUMNS
        );
        let rating = patch.rating.map(rating_param).transpose()?;
        tracing::debug!(sql = %sql, %id, "query");
        let row = sqlx::query_as::<_, StoredBookmark>(&sql)
            .bind(id)
            .bind(patch.title)
            .bind(patch.url)
            .bind(patch.description)
            .bind(rating)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for StoredBookmark {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(StoredBookmark {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            url: row.try_get("url")?,
            description: row.try_get("description")?,
            rating: rating_cell(row, "rating")?,
        })
    }
}

/// Decode the rating column whatever its declared type.
fn rating_cell(row: &PgRow, name: &str) -> Result<StoredRating, sqlx::Error> {
    if let Ok(n) = row.try_get::<i16, _>(name) {
        return Ok(StoredRating::Int(n.into()));
    }
    if let Ok(n) = row.try_get::<i32, _>(name) {
        return Ok(StoredRating::Int(n.into()));
    }
    if let Ok(n) = row.try_get::<i64, _>(name) {
        return Ok(StoredRating::Int(n));
    }
    if let Ok(n) = row.try_get::<f32, _>(name) {
        return Ok(StoredRating::Float(n.into()));
    }
    if let Ok(n) = row.try_get::<f64, _>(name) {
        return Ok(StoredRating::Float(n));
    }
    if let Ok(d) = row.try_get::<Decimal, _>(name) {
        return Ok(decimal_rating(d));
    }
    row.try_get::<String, _>(name).map(StoredRating::Text)
}

/// NUMERIC values: whole numbers stay integers, anything else goes through f64 or text.
pub(crate) fn decimal_rating(d: Decimal) -> StoredRating {
    if d.fract().is_zero() {
        if let Some(n) = d.to_i64() {
            return StoredRating::Int(n);
        }
    }
    match d.to_f64() {
        Some(f) => StoredRating::Float(f),
        None => StoredRating::Text(d.to_string()),
    }
}
