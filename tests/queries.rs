use std::io::Cursor;

use bookshelf::loader::csv::load_from_reader;
use bookshelf::query::Catalog;

/// Catalog loaded through the full pipeline, not hand-built records.
fn loaded_catalog() -> Catalog {
    let input = "Title,Author,Rating,Reviews,Price,Year,Genre\n\
                 Pride and Prejudice,Jane Austen,4.7,35214,10,2013,Fiction\n\
                 Emma,Jane Austen,4.4,12221,12,2015,Fiction\n\
                 Dune,Frank Herbert,4.7,35576,9,2019,Fiction\n\
                 Persuasion,JANE AUSTEN,4.5,8043,11,2011,Fiction\n\
                 Emma,Jane Austen,4.4,12221,14,2021,Fiction\n";
    let report = load_from_reader(Cursor::new(input.as_bytes())).unwrap();
    Catalog::new(report.books)
}

#[test]
fn count_by_author_equal_under_case_and_trim_variants() {
    let catalog = loaded_catalog();

    let canonical = catalog.count_by_author("Jane Austen");
    assert_eq!(canonical, 4);
    assert_eq!(catalog.count_by_author("jane austen"), canonical);
    assert_eq!(catalog.count_by_author("  JANE AUSTEN  "), canonical);
}

#[test]
fn count_by_author_zero_for_unknown_author() {
    assert_eq!(loaded_catalog().count_by_author("Charlotte Bronte"), 0);
}

#[test]
fn distinct_authors_keeps_both_case_spellings() {
    let catalog = loaded_catalog();
    let authors = catalog.distinct_authors();

    // "Jane Austen" and "JANE AUSTEN" dedupe separately: raw spelling identity.
    assert_eq!(authors.len(), 3);
    assert!(authors.contains("Jane Austen"));
    assert!(authors.contains("JANE AUSTEN"));
    assert!(authors.contains("Frank Herbert"));
}

#[test]
fn titles_by_author_in_file_order_with_duplicates() {
    let catalog = loaded_catalog();
    assert_eq!(
        catalog.titles_by_author("jane austen"),
        vec!["Pride and Prejudice", "Emma", "Persuasion", "Emma"]
    );
    assert!(catalog.titles_by_author("nobody").is_empty());
}

#[test]
fn books_by_rating_matches_exactly() {
    let catalog = loaded_catalog();

    let matches = catalog.books_by_rating(4.7);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].title, "Pride and Prejudice");
    assert_eq!(matches[1].title, "Dune");

    // No epsilon tolerance in either direction.
    assert!(catalog.books_by_rating(4.700_000_01).is_empty());
    assert!(catalog.books_by_rating(4.699_999_9).is_empty());
}

#[test]
fn prices_by_author_collapses_duplicate_titles_last_wins() {
    let catalog = loaded_catalog();
    let prices = catalog.prices_by_author("Jane Austen");

    // Four matching records, but the two "Emma" rows share a key.
    assert_eq!(prices.len(), 3);
    assert_eq!(prices.get("Pride and Prejudice"), Some(&10.0));
    assert_eq!(prices.get("Persuasion"), Some(&11.0));
    // The later row's price wins.
    assert_eq!(prices.get("Emma"), Some(&14.0));
}

#[test]
fn prices_by_author_empty_for_no_matches() {
    assert!(loaded_catalog().prices_by_author("nobody").is_empty());
}

#[test]
fn repeated_queries_return_identical_results() {
    let catalog = loaded_catalog();

    assert_eq!(catalog.total_count(), catalog.total_count());
    assert_eq!(
        catalog.count_by_author(" jane austen "),
        catalog.count_by_author(" jane austen ")
    );
    assert_eq!(catalog.distinct_authors(), catalog.distinct_authors());
    assert_eq!(
        catalog.titles_by_author("Jane Austen"),
        catalog.titles_by_author("Jane Austen")
    );
    assert_eq!(catalog.books_by_rating(4.4), catalog.books_by_rating(4.4));
    assert_eq!(
        catalog.prices_by_author("Jane Austen"),
        catalog.prices_by_author("Jane Austen")
    );
}
