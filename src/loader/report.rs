//! Loader output: the record collection plus per-row skip diagnostics.

use std::fmt;

use serde::Serialize;

use crate::types::Book;

/// Why a row was excluded from the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SkipReason {
    /// The row tokenized into fewer than 7 fields.
    InsufficientColumns {
        /// Observed field count.
        found: usize,
    },
    /// The rating field did not parse as a decimal number.
    InvalidRating { raw: String },
    /// The reviews field did not parse as an integer.
    InvalidReviews { raw: String },
    /// The price field did not parse as integer-formatted text.
    InvalidPrice { raw: String },
    /// The year field did not parse as an integer.
    InvalidYear { raw: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InsufficientColumns { found } => {
                write!(f, "insufficient columns ({found})")
            }
            SkipReason::InvalidRating { raw } => write!(f, "invalid rating: '{raw}'"),
            SkipReason::InvalidReviews { raw } => write!(f, "invalid reviews: '{raw}'"),
            SkipReason::InvalidPrice { raw } => write!(f, "invalid price: '{raw}'"),
            SkipReason::InvalidYear { raw } => write!(f, "invalid year: '{raw}'"),
        }
    }
}

/// Advisory diagnostic for one excluded row.
///
/// Skips are data, not errors: they are collected in [`LoadReport::skipped`] (and
/// mirrored to any configured [`super::LoadObserver`]) while loading continues.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSkip {
    /// 1-based line number in the source, header included.
    pub line: usize,
    /// Why the row was excluded.
    pub reason: SkipReason,
    /// The raw line as read, before tokenization.
    pub raw: String,
}

impl fmt::Display for RowSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipping line {} - {}: {}", self.line, self.reason, self.raw)
    }
}

/// Complete output of one load operation.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// The consumed header line, verbatim. `None` only for an entirely blank source.
    pub header: Option<String>,
    /// Successfully parsed records, in file order.
    pub books: Vec<Book>,
    /// One diagnostic per excluded row, in file order.
    pub skipped: Vec<RowSkip>,
}

impl LoadReport {
    /// Number of loaded records.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of excluded rows.
    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }
}
