//! Creation payload validation. Checks run in a fixed order and the first failure is reported.

use crate::error::AppError;
use crate::model::NewBookmark;
use serde_json::{Map, Value};

/// Checked for presence in this order.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "url", "rating"];

pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 5;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a POST /bookmarks body and turn it into a typed record.
    pub fn validate_new(body: &Map<String, Value>) -> Result<NewBookmark, AppError> {
        for field in REQUIRED_FIELDS {
            if is_missing(body.get(field)) {
                return Err(AppError::Validation(format!("{} is required", field)));
            }
        }

        let rating = body
            .get("rating")
            .and_then(parse_rating)
            .ok_or_else(|| AppError::Validation("Invalid rating".into()))?;

        let url = match body.get("url").and_then(Value::as_str) {
            Some(u) if is_web_url(u) => u.to_string(),
            _ => return Err(AppError::Validation("Invalid URL".into())),
        };

        let title = required_str(body, "title")?;
        let description = match body.get("description") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => return Err(AppError::Validation("description must be a string".into())),
        };

        Ok(NewBookmark {
            title,
            url,
            description,
            rating,
        })
    }
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn required_str(body: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(format!("{} must be a string", field)))
}

/// Integer in [MIN_RATING, MAX_RATING]. Floats with no fractional part count as integers.
fn parse_rating(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    let rating = match n.as_i64() {
        Some(i) => i,
        None => {
            let f = n.as_f64()?;
            if f.fract() != 0.0 || f < MIN_RATING as f64 || f > MAX_RATING as f64 {
                return None;
            }
            f as i64
        }
    };
    (MIN_RATING..=MAX_RATING).contains(&rating).then_some(rating)
}

/// Absolute http(s) URL with a host.
pub fn is_web_url(s: &str) -> bool {
    match url::Url::parse(s) {
        Ok(u) => matches!(u.scheme(), "http" | "https") && u.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}
