//! `bookshelf` ingests a comma-separated book dataset into an in-memory, read-only
//! [`query::Catalog`] and answers aggregate queries over it.
//!
//! Loading is fault tolerant: malformed rows never abort a load. Each rejected row is
//! reported as a [`loader::RowSkip`] diagnostic (line number, reason, raw line) and the
//! remaining rows still load. Only a source that cannot be read at all fails the
//! operation, as [`LoadError::SourceUnavailable`].
//!
//! ## Input format
//!
//! The first non-blank line is a header and is consumed without being parsed. Every
//! following non-blank line is a record with at least 7 comma-separated fields, in
//! order: title, author, rating, reviews, price, year, genre. Fields may be wrapped in
//! double quotes to embed literal commas; a `"` toggles the quoted state (there is no
//! quote escaping beyond that).
//!
//! ## Quick example: load and query
//!
//! ```no_run
//! use bookshelf::loader::{self, LoadOptions};
//! use bookshelf::query::Catalog;
//!
//! # fn main() -> Result<(), bookshelf::LoadError> {
//! let report = loader::load_from_path("bestsellers.csv", &LoadOptions::default())?;
//! println!("loaded {} rows, skipped {}", report.books.len(), report.skipped.len());
//!
//! let catalog = Catalog::new(report.books);
//! println!("{} distinct authors", catalog.distinct_authors().len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Querying an in-memory collection
//!
//! ```
//! use bookshelf::query::Catalog;
//! use bookshelf::types::Book;
//!
//! let catalog = Catalog::new(vec![
//!     Book {
//!         title: "Educated".to_string(),
//!         author: "Tara Westover".to_string(),
//!         rating: 4.7,
//!         reviews: 28729,
//!         price: 9.0,
//!         year: 2019,
//!         genre: "Non Fiction".to_string(),
//!     },
//!     Book {
//!         title: "Becoming".to_string(),
//!         author: "Michelle Obama".to_string(),
//!         rating: 4.8,
//!         reviews: 61133,
//!         price: 11.0,
//!         year: 2018,
//!         genre: "Non Fiction".to_string(),
//!     },
//! ]);
//!
//! // Author matches trim the query and ignore case.
//! assert_eq!(catalog.count_by_author("  tara westover  "), 1);
//! assert_eq!(catalog.titles_by_author("TARA WESTOVER"), vec!["Educated"]);
//! assert_eq!(catalog.books_by_rating(4.8).len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`loader`]: CSV loading, skip diagnostics, load observability
//! - [`query`]: the immutable catalog and its query operations
//! - [`types`]: the record type
//! - [`error`]: error types

pub mod error;
pub mod loader;
pub mod query;
pub mod types;

pub use error::{LoadError, LoadResult};
