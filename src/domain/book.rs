//! Book record model.
//!
//! This module defines the core `Book` type: one immutable catalog entry
//! created at load time from the bundled catalog document. Author and genre
//! fields are foreign keys into the catalog's directories and are resolved to
//! display names at render time, never stored denormalized here.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A single immutable book record from the catalog.
///
/// Records are deserialized once from the bundled catalog document and are
/// never mutated or destroyed during a session.
///
/// # Fields
///
/// - `id`: unique identifier, used to trace a rendered item back to its record
/// - `title`: display title, matched case-insensitively by the filter engine
/// - `description`: full description shown in the detail overlay
/// - `author`: author identifier, foreign key into the author directory
/// - `genres`: ordered genre identifiers, foreign keys into the genre directory
/// - `image`: cover image reference (URI)
/// - `published`: publication timestamp, source of the detail subtitle year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub genres: Vec<String>,
    pub image: String,
    pub published: DateTime<Utc>,
}

impl Book {
    /// Returns the four-digit publication year for the detail subtitle.
    #[must_use]
    pub fn publication_year(&self) -> i32 {
        self.published.year()
    }

    /// Returns whether the book carries the given genre identifier.
    #[must_use]
    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genres.iter().any(|g| g == genre_id)
    }
}
