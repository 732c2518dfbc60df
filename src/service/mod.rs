//! Validation of incoming payloads and serialization of stored rows.

mod serialize;
mod validation;
pub use serialize::{escape_html, rating_number, serialize_bookmark, serialize_bookmarks};
pub use validation::{is_web_url, RequestValidator, MAX_RATING, MIN_RATING, REQUIRED_FIELDS};
