//! Catalog store: the bundled book collection and its directories.
//!
//! This module owns the static input data of the application: the ordered
//! book sequence, the author and genre directories (identifier to display
//! name), and the page-size constant governing paginated reveal. All of it is
//! deserialized once from the catalog document embedded at compile time and
//! is read-only for the lifetime of the session.
//!
//! The store also derives the dropdown option lists for the search form, each
//! prefixed with the `"any"` sentinel option so an unconstrained submission
//! round-trips through the filter engine unchanged.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{Book, ANY};

/// One selectable entry in a search-form dropdown.
///
/// `value` is what a submission carries into the filter criteria (an
/// identifier, or the `"any"` sentinel); `label` is the display name shown in
/// the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// The static, read-only catalog supplied before first render.
///
/// Holds the full book sequence in catalog order, both display-name
/// directories, and the page size. Never mutated after construction.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    /// Ordered book records; the order here is the order every result set
    /// preserves.
    pub books: Vec<Book>,

    /// Author identifier to display name.
    pub authors: BTreeMap<String, String>,

    /// Genre identifier to display name.
    pub genres: BTreeMap<String, String>,

    /// Number of items revealed per render batch.
    pub page_size: usize,
}

impl Catalog {
    /// Constructs a catalog from its parts.
    ///
    /// Used by tests and by callers supplying their own data; the binary uses
    /// [`Catalog::bundled`].
    #[must_use]
    pub fn new(
        books: Vec<Book>,
        authors: BTreeMap<String, String>,
        genres: BTreeMap<String, String>,
        page_size: usize,
    ) -> Self {
        Self {
            books,
            authors,
            genres,
            page_size,
        }
    }

    /// Loads the catalog document embedded at compile time.
    ///
    /// # Panics
    ///
    /// Panics if the bundled document fails to parse, which would be a defect
    /// in the shipped data rather than a runtime condition.
    #[must_use]
    pub fn bundled() -> Self {
        serde_json::from_str(include_str!("../../data/catalog.json"))
            .expect("bundled catalog document should always parse")
    }

    /// Looks up a book by identifier in the full catalog.
    ///
    /// Selection resolution goes through this lookup (not through the current
    /// result set) so activating an item succeeds regardless of which page or
    /// filter produced it.
    #[must_use]
    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Resolves an author identifier to its display name.
    #[must_use]
    pub fn author_name(&self, id: &str) -> Option<&str> {
        self.authors.get(id).map(String::as_str)
    }

    /// Resolves a genre identifier to its display name.
    #[must_use]
    pub fn genre_name(&self, id: &str) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }

    /// Builds the genre dropdown options: the `"any"` sentinel labeled
    /// "All Genres" first, then every genre sorted by display name.
    #[must_use]
    pub fn genre_options(&self) -> Vec<SelectOption> {
        Self::directory_options(&self.genres, "All Genres")
    }

    /// Builds the author dropdown options: the `"any"` sentinel labeled
    /// "All Authors" first, then every author sorted by display name.
    #[must_use]
    pub fn author_options(&self) -> Vec<SelectOption> {
        Self::directory_options(&self.authors, "All Authors")
    }

    fn directory_options(
        directory: &BTreeMap<String, String>,
        any_label: &str,
    ) -> Vec<SelectOption> {
        let mut options: Vec<SelectOption> = directory
            .iter()
            .map(|(value, label)| SelectOption {
                value: value.clone(),
                label: label.clone(),
            })
            .collect();
        options.sort_by(|a, b| a.label.cmp(&b.label));

        let mut all = Vec::with_capacity(options.len() + 1);
        all.push(SelectOption {
            value: ANY.to_string(),
            label: any_label.to_string(),
        });
        all.extend(options);
        all
    }
}
