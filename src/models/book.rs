//! Book (catalog entry) model and related payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A lendable catalog record.
///
/// The title is the de facto identity key within a catalog (compared
/// case-insensitively). Duplicate titles are permitted; lookups resolve to
/// the first match in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub is_available: bool,
}

impl Book {
    /// Create a new record, available for lending.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            is_available: true,
        }
    }

    /// Case-insensitive exact title match.
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Case-insensitive substring match against title or author.
    /// `query` must already be lowercased by the caller.
    pub(crate) fn matches_query(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query) || self.author.to_lowercase().contains(query)
    }
}

/// Payload for adding a book to the catalog.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}
