//! Request extractors.

pub mod bookmark;
pub use bookmark::ResolvedBookmark;
