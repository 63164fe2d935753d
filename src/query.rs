//! Read-only aggregate queries over a loaded record collection.

use std::collections::{HashMap, HashSet};

use crate::types::Book;

/// Immutable book collection with aggregate query operations.
///
/// A `Catalog` is constructed once from the loader's output and never mutated
/// afterwards; every operation is a pure read, so repeated calls with the same
/// arguments always return the same results.
///
/// Operations that take an author trim the query and compare case-insensitively
/// (exact equality under case folding, not substring match). Zero matches yield
/// empty results, never errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create a catalog from records in file order.
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// All records, in file order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Total number of records.
    pub fn total_count(&self) -> usize {
        self.books.len()
    }

    /// Number of records by `author`.
    pub fn count_by_author(&self, author: &str) -> usize {
        let wanted = fold_query(author);
        self.books
            .iter()
            .filter(|b| author_matches(&b.author, &wanted))
            .count()
    }

    /// Unique authors, deduplicated on the exact stored spelling.
    ///
    /// Unlike the author-matching operations, deduplication here is case-SENSITIVE:
    /// "Jane Austen" and "JANE AUSTEN" are two entries if both spellings occur in
    /// the data. No ordering is applied; callers that want a stable display order
    /// sort the result themselves.
    pub fn distinct_authors(&self) -> HashSet<&str> {
        self.books.iter().map(|b| b.author.as_str()).collect()
    }

    /// Titles of records by `author`, in file order.
    ///
    /// Duplicate rows produce duplicate titles.
    pub fn titles_by_author(&self, author: &str) -> Vec<&str> {
        let wanted = fold_query(author);
        self.books
            .iter()
            .filter(|b| author_matches(&b.author, &wanted))
            .map(|b| b.title.as_str())
            .collect()
    }

    /// Records whose rating is exactly `rating`, in file order.
    ///
    /// Strict floating-point equality, no epsilon: `4.7` does not match
    /// `4.70000001`.
    pub fn books_by_rating(&self, rating: f64) -> Vec<&Book> {
        self.books.iter().filter(|b| b.rating == rating).collect()
    }

    /// Title -> price for records by `author`.
    ///
    /// Title is the map key, so two matching records with the same title collapse
    /// to one entry holding the later (in file order) record's price. That is a
    /// known consequence of keying on title, not a defect.
    pub fn prices_by_author(&self, author: &str) -> HashMap<&str, f64> {
        let wanted = fold_query(author);
        self.books
            .iter()
            .filter(|b| author_matches(&b.author, &wanted))
            .map(|b| (b.title.as_str(), b.price))
            .collect()
    }
}

/// Fold a query author for matching: trim, then lowercase.
///
/// Stored authors are already trimmed at load, so [`author_matches`] only folds
/// case on the stored side. Every author-matching operation goes through this
/// pair so they cannot drift apart.
fn fold_query(author: &str) -> String {
    author.trim().to_lowercase()
}

fn author_matches(stored: &str, folded_query: &str) -> bool {
    stored.to_lowercase() == folded_query
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::types::Book;

    fn book(title: &str, author: &str, rating: f64, price: f64) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            rating,
            reviews: 100,
            price,
            year: 2019,
            genre: "Fiction".to_string(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            book("Book A", "Author X", 4.5, 15.0),
            book("Book B", "Author X", 4.7, 20.0),
            book("Book D", "Author Y", 4.2, 8.0),
        ])
    }

    #[test]
    fn total_count_is_collection_size() {
        assert_eq!(sample_catalog().total_count(), 3);
        assert_eq!(Catalog::new(Vec::new()).total_count(), 0);
    }

    #[test]
    fn count_by_author_ignores_query_case_and_whitespace() {
        let catalog = sample_catalog();
        assert_eq!(catalog.count_by_author("Author X"), 2);
        assert_eq!(catalog.count_by_author("author x"), 2);
        assert_eq!(catalog.count_by_author("  AUTHOR X  "), 2);
    }

    #[test]
    fn count_by_author_is_exact_match_not_substring() {
        let catalog = sample_catalog();
        assert_eq!(catalog.count_by_author("Author"), 0);
        assert_eq!(catalog.count_by_author("Author X Jr."), 0);
    }

    #[test]
    fn distinct_authors_dedupes_on_stored_spelling() {
        let catalog = Catalog::new(vec![
            book("A", "Jane Austen", 4.0, 10.0),
            book("B", "JANE AUSTEN", 4.0, 10.0),
            book("C", "Jane Austen", 4.0, 10.0),
        ]);
        let authors = catalog.distinct_authors();
        assert_eq!(authors.len(), 2);
        assert!(authors.contains("Jane Austen"));
        assert!(authors.contains("JANE AUSTEN"));
    }

    #[test]
    fn titles_by_author_preserves_file_order_and_duplicates() {
        let catalog = Catalog::new(vec![
            book("Second Chances", "Author X", 4.0, 10.0),
            book("Book D", "Author Y", 4.2, 8.0),
            book("First Steps", "author x", 4.1, 11.0),
            book("Second Chances", "AUTHOR X", 4.0, 12.0),
        ]);
        assert_eq!(
            catalog.titles_by_author("Author X"),
            vec!["Second Chances", "First Steps", "Second Chances"]
        );
    }

    #[test]
    fn books_by_rating_uses_strict_equality() {
        let catalog = Catalog::new(vec![
            book("Exact", "Author X", 4.7, 10.0),
            book("Above", "Author X", 4.700_000_01, 10.0),
            book("Below", "Author X", 4.699_999_9, 10.0),
        ]);
        let matches = catalog.books_by_rating(4.7);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Exact");
    }

    #[test]
    fn books_by_rating_empty_for_no_matches() {
        assert!(sample_catalog().books_by_rating(1.0).is_empty());
    }

    #[test]
    fn prices_by_author_maps_title_to_price() {
        let catalog = sample_catalog();
        let prices = catalog.prices_by_author("author x");
        assert_eq!(prices.len(), 2);
        assert_eq!(prices.get("Book A"), Some(&15.0));
        assert_eq!(prices.get("Book B"), Some(&20.0));
    }

    #[test]
    fn prices_by_author_last_wins_on_duplicate_titles() {
        let catalog = Catalog::new(vec![
            book("Reprint", "Author X", 4.0, 10.0),
            book("Reprint", "Author X", 4.0, 12.0),
        ]);
        let prices = catalog.prices_by_author("Author X");
        assert_eq!(prices.len(), 1);
        assert_eq!(prices.get("Reprint"), Some(&12.0));
    }

    #[test]
    fn queries_are_idempotent() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.count_by_author("Author X"),
            catalog.count_by_author("Author X")
        );
        assert_eq!(
            catalog.titles_by_author("Author Y"),
            catalog.titles_by_author("Author Y")
        );
        assert_eq!(catalog.books_by_rating(4.5), catalog.books_by_rating(4.5));
        assert_eq!(
            catalog.prices_by_author("Author X"),
            catalog.prices_by_author("Author X")
        );
        assert_eq!(catalog.distinct_authors(), catalog.distinct_authors());
    }
}
