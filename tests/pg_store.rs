//! Needs a PostgreSQL database: `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`.

use bookmarks_api::{
    ensure_bookmarks_table, BookmarkPatch, BookmarkStore, NewBookmark, PgBookmarkStore, StoredBookmark, StoredRating,
};
use uuid::Uuid;

async fn store() -> PgBookmarkStore {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set for PostgreSQL tests");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    ensure_bookmarks_table(&pool).await.unwrap();
    PgBookmarkStore::new(pool)
}

fn new_bookmark() -> NewBookmark {
    NewBookmark {
        title: format!("pg-{}", Uuid::new_v4()),
        url: "https://example.com".into(),
        description: None,
        rating: 2,
    }
}

#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL pointing at PostgreSQL"]
async fn create_get_delete_round_trip() {
    let store = store().await;

    let created = store.create(new_bookmark()).await.unwrap();
    assert_eq!(created.rating, StoredRating::Int(2));
    assert_eq!(created.description, None);

    let fetched = store.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert!(store.list_all().await.unwrap().iter().any(|b| b.id == created.id));

    assert_eq!(store.delete_by_id(created.id).await.unwrap(), 1);
    assert_eq!(store.delete_by_id(created.id).await.unwrap(), 0);
    assert!(store.get_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL pointing at PostgreSQL"]
async fn update_changes_only_supplied_fields() {
    let store = store().await;

    let created = store.create(new_bookmark()).await.unwrap();
    let patch = BookmarkPatch {
        description: Some("updated".into()),
        ..Default::default()
    };
    let updated = store.update(created.id, patch).await.unwrap().unwrap();
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description.as_deref(), Some("updated"));
    assert_eq!(updated.rating, StoredRating::Int(2));

    assert!(store.update(Uuid::new_v4(), BookmarkPatch::default()).await.unwrap().is_none());
    store.delete_by_id(created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL pointing at PostgreSQL"]
async fn ping_succeeds() {
    let store = store().await;
    store.ping().await.unwrap();
}

#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL pointing at PostgreSQL"]
async fn numeric_rating_columns_decode() {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set for PostgreSQL tests");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .unwrap();

    let whole: StoredBookmark = sqlx::query_as(
        "SELECT gen_random_uuid() AS id, 'n' AS title, 'https://example.com' AS url, \
         NULL::text AS description, 4::numeric AS rating",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(whole.rating, StoredRating::Int(4));

    let fractional: StoredBookmark = sqlx::query_as(
        "SELECT gen_random_uuid() AS id, 'n' AS title, 'https://example.com' AS url, \
         NULL::text AS description, 2.5::numeric AS rating",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(fractional.rating, StoredRating::Float(2.5));
}
