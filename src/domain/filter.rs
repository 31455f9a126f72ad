//! Filter criteria and the catalog filter engine.
//!
//! This module implements the one piece of query logic in the application:
//! given the full catalog and a set of criteria from the search form, compute
//! the ordered subset of books matching all constraints. Filtering is a pure
//! linear scan with no I/O and no mutation; identical inputs always produce an
//! identical, identically-ordered result.

use super::Book;

/// Sentinel dropdown value meaning "no constraint" for author and genre.
///
/// The search form's dropdowns prepend an option with this value labeled
/// "All Genres" / "All Authors"; submitting it leaves the field unconstrained.
pub const ANY: &str = "any";

/// Transient filter criteria built from one search submission.
///
/// Created when the search form is submitted and discarded after producing a
/// result set. The title constraint is matched as a trimmed, case-folded
/// substring; author and genre use the [`ANY`] sentinel for "unconstrained".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    /// Title substring, case-insensitive, trimmed. Empty means no constraint.
    pub title: String,
    /// Genre identifier, or [`ANY`]. Matches when present anywhere in a
    /// book's genre set.
    pub genre: String,
    /// Author identifier, or [`ANY`]. Matches on exact equality.
    pub author: String,
}

impl Criteria {
    /// Criteria matching every book: empty title, both dropdowns on [`ANY`].
    ///
    /// # Example
    ///
    /// ```
    /// use bookrack::domain::{Criteria, ANY};
    ///
    /// let c = Criteria::unconstrained();
    /// assert_eq!(c.genre, ANY);
    /// assert!(c.title.is_empty());
    /// ```
    #[must_use]
    pub fn unconstrained() -> Self {
        Self {
            title: String::new(),
            genre: ANY.to_string(),
            author: ANY.to_string(),
        }
    }

    /// Evaluates all three constraints against one book.
    ///
    /// Each constraint is computed unconditionally; the result is their
    /// conjunction. A book matches when:
    /// - the genre constraint is [`ANY`], or the book's genre set contains it;
    /// - the title constraint is empty after trimming, or the case-folded
    ///   title contains the case-folded constraint as a substring;
    /// - the author constraint is [`ANY`], or the book's author id equals it.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        let needle = self.title.trim().to_lowercase();

        let genre_match = self.genre == ANY || book.has_genre(&self.genre);
        let title_match = needle.is_empty() || book.title.to_lowercase().contains(&needle);
        let author_match = self.author == ANY || book.author == self.author;

        genre_match && title_match && author_match
    }
}

/// Computes the ordered sub-sequence of `books` matching `criteria`.
///
/// The result preserves catalog order and is always a subset of the input.
/// An empty result is a first-class value (the trigger for the "no matches"
/// display state), not an error.
///
/// # Example
///
/// ```
/// use bookrack::domain::{filter_books, Criteria};
///
/// let all = filter_books(&[], &Criteria::unconstrained());
/// assert!(all.is_empty());
/// ```
#[must_use]
pub fn filter_books(books: &[Book], criteria: &Criteria) -> Vec<Book> {
    let _span = tracing::debug_span!(
        "filter_books",
        total_books = books.len(),
        title_len = criteria.title.len(),
        genre = %criteria.genre,
        author = %criteria.author,
    )
    .entered();

    let matches: Vec<Book> = books
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect();

    tracing::debug!(matched = matches.len(), "filter applied");

    matches
}
