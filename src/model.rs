//! Bookmark records: stored rows, creation payloads, patches, and the external form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rating as it comes back from storage. The column may be any integer type,
/// a float, or numeric rendered as text; the serializer turns it into a number.
#[derive(Clone, Debug, PartialEq)]
pub enum StoredRating {
    Int(i64),
    Float(f64),
    Text(String),
}

/// One row of the `bookmarks` table.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredBookmark {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: StoredRating,
}

/// A validated creation payload. The id is assigned by the store.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: i64,
}

impl NewBookmark {
    pub fn into_stored(self, id: Uuid) -> StoredBookmark {
        StoredBookmark {
            id,
            title: self.title,
            url: self.url,
            description: self.description,
            rating: StoredRating::Int(self.rating),
        }
    }
}

/// Partial update: only `Some` fields are written.
#[derive(Clone, Debug, Default)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i64>,
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.description.is_none() && self.rating.is_none()
    }

    pub fn apply(self, row: &mut StoredBookmark) {
        if let Some(title) = self.title {
            row.title = title;
        }
        if let Some(url) = self.url {
            row.url = url;
        }
        if let Some(description) = self.description {
            row.description = Some(description);
        }
        if let Some(rating) = self.rating {
            row.rating = StoredRating::Int(rating);
        }
    }
}

/// Client-facing bookmark.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: serde_json::Number,
}
