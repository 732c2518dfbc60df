//! Stored row to client-facing bookmark.

use crate::error::AppError;
use crate::model::{Bookmark, StoredBookmark, StoredRating};
use serde_json::Number;

pub fn serialize_bookmark(row: StoredBookmark) -> Result<Bookmark, AppError> {
    let rating = rating_number(&row.rating)?;
    Ok(Bookmark {
        id: row.id,
        title: escape_html(&row.title),
        url: row.url,
        description: row.description.as_deref().map(escape_html),
        rating,
    })
}

pub fn serialize_bookmarks(rows: Vec<StoredBookmark>) -> Result<Vec<Bookmark>, AppError> {
    rows.into_iter().map(serialize_bookmark).collect()
}

/// Integral values come out as JSON integers whatever the stored representation.
pub fn rating_number(rating: &StoredRating) -> Result<Number, AppError> {
    let not_numeric = || AppError::Internal(format!("stored rating is not numeric: {:?}", rating));
    match rating {
        StoredRating::Int(n) => Ok(Number::from(*n)),
        StoredRating::Float(f) => float_number(*f).ok_or_else(not_numeric),
        StoredRating::Text(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<i64>() {
                return Ok(Number::from(n));
            }
            s.parse::<f64>().ok().and_then(float_number).ok_or_else(not_numeric)
        }
    }
}

fn float_number(f: f64) -> Option<Number> {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        return Some(Number::from(f as i64));
    }
    Number::from_f64(f)
}

/// Escape HTML-sensitive characters so injected markup renders as text.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn row(rating: StoredRating) -> StoredBookmark {
        StoredBookmark {
            id: Uuid::new_v4(),
            title: "title".into(),
            url: "https://example.com/?a=1&b=2".into(),
            description: Some("desc".into()),
            rating,
        }
    }

    #[test]
    fn rating_is_numeric_whatever_its_stored_type() {
        for stored in [
            StoredRating::Int(3),
            StoredRating::Float(3.0),
            StoredRating::Text("3".into()),
            StoredRating::Text(" 3.0 ".into()),
        ] {
            let bookmark = serialize_bookmark(row(stored.clone())).unwrap();
            let json = serde_json::to_value(&bookmark).unwrap();
            let reparsed: i64 = serde_json::from_value(json["rating"].clone()).unwrap();
            assert_eq!(reparsed, 3, "stored {:?}", stored);
        }
    }

    #[test]
    fn non_numeric_rating_is_an_internal_error() {
        let err = serialize_bookmark(row(StoredRating::Text("five".into()))).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn escapes_title_and_description_but_not_url() {
        let mut r = row(StoredRating::Int(1));
        r.title = r#"<script>alert("xss")</script>"#.into();
        r.description = Some("Tom & Jerry's <b>show</b>".into());
        let bookmark = serialize_bookmark(r).unwrap();
        assert_eq!(bookmark.title, "&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;");
        assert_eq!(bookmark.description.as_deref(), Some("Tom &amp; Jerry&#39;s &lt;b&gt;show&lt;/b&gt;"));
        assert_eq!(bookmark.url, "https://example.com/?a=1&b=2");
    }

    #[test]
    fn absent_description_stays_absent() {
        let mut r = row(StoredRating::Int(1));
        r.description = None;
        assert_eq!(serialize_bookmark(r).unwrap().description, None);
    }

    #[test]
    fn serializes_every_element_of_a_collection() {
        let rows = vec![row(StoredRating::Int(1)), row(StoredRating::Text("2".into()))];
        let ratings: Vec<_> = serialize_bookmarks(rows)
            .unwrap()
            .into_iter()
            .map(|b| b.rating.as_i64())
            .collect();
        assert_eq!(ratings, vec![Some(1), Some(2)]);
    }
}
