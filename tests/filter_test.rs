// Integration tests for the filter engine.

mod common;

use bookrack::{filter_books, Criteria, ANY};
use common::small_catalog;

fn ids(books: &[bookrack::Book]) -> Vec<&str> {
    books.iter().map(|b| b.id.as_str()).collect()
}

#[test]
fn test_unconstrained_criteria_return_full_catalog() {
    let catalog = small_catalog(36);
    let result = filter_books(&catalog.books, &Criteria::unconstrained());

    assert_eq!(
        ids(&result),
        vec!["b1", "b2", "b3", "b4", "b5"],
        "Empty title with both dropdowns on 'any' should match everything in order"
    );
}

#[test]
fn test_title_substring_is_case_insensitive() {
    let catalog = small_catalog(36);
    let criteria = Criteria {
        title: "LIGHT".to_string(),
        genre: ANY.to_string(),
        author: ANY.to_string(),
    };

    let result = filter_books(&catalog.books, &criteria);
    assert_eq!(ids(&result), vec!["b1", "b2", "b4"]);
}

#[test]
fn test_title_is_trimmed_before_matching() {
    let catalog = small_catalog(36);
    let criteria = Criteria {
        title: "  light  ".to_string(),
        genre: ANY.to_string(),
        author: ANY.to_string(),
    };

    let result = filter_books(&catalog.books, &criteria);
    assert_eq!(ids(&result), vec!["b1", "b2", "b4"]);
}

#[test]
fn test_whitespace_only_title_is_no_constraint() {
    let catalog = small_catalog(36);
    let criteria = Criteria {
        title: "   ".to_string(),
        genre: ANY.to_string(),
        author: ANY.to_string(),
    };

    let result = filter_books(&catalog.books, &criteria);
    assert_eq!(result.len(), 5, "A blank title should not constrain anything");
}

#[test]
fn test_genre_matches_anywhere_in_genre_set() {
    let catalog = small_catalog(36);
    let criteria = Criteria {
        title: String::new(),
        genre: "g2".to_string(),
        author: ANY.to_string(),
    };

    // b2 carries g2 as its second genre and must still match.
    let result = filter_books(&catalog.books, &criteria);
    assert_eq!(ids(&result), vec!["b2", "b3", "b5"]);
}

#[test]
fn test_author_matches_on_exact_equality() {
    let catalog = small_catalog(36);
    let criteria = Criteria {
        title: String::new(),
        genre: ANY.to_string(),
        author: "a2".to_string(),
    };

    let result = filter_books(&catalog.books, &criteria);
    assert_eq!(ids(&result), vec!["b2", "b5"]);
}

#[test]
fn test_all_constraints_must_hold_together() {
    let catalog = small_catalog(36);

    let title_and_genre = Criteria {
        title: "light".to_string(),
        genre: "g1".to_string(),
        author: ANY.to_string(),
    };
    assert_eq!(ids(&filter_books(&catalog.books, &title_and_genre)), vec!["b1", "b2"]);

    let all_three = Criteria {
        title: "light".to_string(),
        genre: "g1".to_string(),
        author: "a2".to_string(),
    };
    assert_eq!(ids(&filter_books(&catalog.books, &all_three)), vec!["b2"]);
}

#[test]
fn test_no_matches_yields_empty_result_not_error() {
    let catalog = small_catalog(36);
    let criteria = Criteria {
        title: "zzzzz".to_string(),
        genre: ANY.to_string(),
        author: ANY.to_string(),
    };

    let result = filter_books(&catalog.books, &criteria);
    assert!(result.is_empty());
}

#[test]
fn test_empty_catalog_yields_empty_result() {
    let result = filter_books(&[], &Criteria::unconstrained());
    assert!(result.is_empty());
}

#[test]
fn test_filtering_is_idempotent() {
    let catalog = small_catalog(36);
    let criteria = Criteria {
        title: "light".to_string(),
        genre: ANY.to_string(),
        author: ANY.to_string(),
    };

    let first = filter_books(&catalog.books, &criteria);
    let second = filter_books(&catalog.books, &criteria);
    assert_eq!(first, second, "Identical inputs must produce identical results");
}

#[test]
fn test_result_is_order_preserving_subset() {
    let catalog = small_catalog(36);
    let criteria = Criteria {
        title: String::new(),
        genre: "g2".to_string(),
        author: ANY.to_string(),
    };

    let result = filter_books(&catalog.books, &criteria);
    let catalog_ids = ids(&catalog.books);
    let result_ids = ids(&result);

    // Every result id exists in the catalog, in the same relative order.
    let mut positions = result_ids
        .iter()
        .map(|id| catalog_ids.iter().position(|c| c == id).expect("subset"));
    let mut previous = positions.next().unwrap();
    for position in positions {
        assert!(position > previous, "Catalog order must be preserved");
        previous = position;
    }
}
