//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;

use bookrack::{AppState, Book, Catalog, Theme, ThemeMode};
use chrono::{TimeZone, Utc};

/// Builds one book record with a first-of-January publication date.
pub fn book(id: &str, title: &str, author: &str, genres: &[&str], year: i32) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Description of {title}."),
        author: author.to_string(),
        genres: genres.iter().map(ToString::to_string).collect(),
        image: format!("https://covers.example.org/{id}.jpg"),
        published: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// A five-book catalog with three authors and three genres.
///
/// Titles are chosen so the substring "light" matches b1, b2, and b4 and
/// nothing else.
pub fn small_catalog(page_size: usize) -> Catalog {
    let books = vec![
        book("b1", "Dust and Light", "a1", &["g1"], 2001),
        book("b2", "The Glass Light", "a2", &["g1", "g2"], 2002),
        book("b3", "Northern Water", "a1", &["g2"], 2003),
        book("b4", "Light Years", "a3", &["g3"], 2004),
        book("b5", "Quiet Harbor", "a2", &["g2"], 2005),
    ];

    let mut authors = BTreeMap::new();
    authors.insert("a1".to_string(), "Ada Linden".to_string());
    authors.insert("a2".to_string(), "Marcus Bell".to_string());
    authors.insert("a3".to_string(), "Ivy Chen".to_string());

    let mut genres = BTreeMap::new();
    genres.insert("g1".to_string(), "Saga".to_string());
    genres.insert("g2".to_string(), "Noir".to_string());
    genres.insert("g3".to_string(), "Field Notes".to_string());

    Catalog::new(books, authors, genres, page_size)
}

/// Application state over the five-book catalog with the day theme.
pub fn test_state(page_size: usize) -> AppState {
    AppState::new(
        small_catalog(page_size),
        ThemeMode::Day,
        Theme::for_mode(ThemeMode::Day),
    )
}

/// Identifiers of the revealed display items, in reveal order.
pub fn revealed_ids(state: &AppState) -> Vec<String> {
    state.revealed.iter().map(|item| item.id.clone()).collect()
}
