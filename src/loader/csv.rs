//! CSV loading implementation.
//!
//! The field splitter is deliberately not an RFC 4180 parser: a `"` toggles the
//! in-quotes state and is dropped from the field text, so a doubled quote is two
//! toggles rather than an escaped literal quote. Commas inside the quoted state do
//! not split fields. This matches the dataset this crate ingests.

use std::io::BufRead;

use crate::error::LoadResult;
use crate::types::Book;

use super::report::{LoadReport, RowSkip, SkipReason};

/// Load records from an already-open text source.
///
/// Rules:
///
/// - Leading blank lines are skipped; the first non-blank line is the header and is
///   consumed without being parsed (it is echoed back via [`LoadReport::header`]).
/// - Blank lines elsewhere are skipped silently.
/// - Every other line is tokenized and validated; rejected rows become [`RowSkip`]
///   diagnostics and never abort the load.
///
/// An empty or header-only source yields an empty collection, not an error. Only a
/// read failure from `reader` itself fails the call.
pub fn load_from_reader<R: BufRead>(reader: R) -> LoadResult<LoadReport> {
    let mut books: Vec<Book> = Vec::new();
    let mut skipped: Vec<RowSkip> = Vec::new();
    let mut header: Option<String> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let number = idx + 1;

        if line.trim().is_empty() {
            continue;
        }
        if header.is_none() {
            header = Some(line);
            continue;
        }

        let fields = split_fields(&line);
        match parse_row(&fields) {
            Ok(book) => books.push(book),
            Err(reason) => skipped.push(RowSkip {
                line: number,
                reason,
                raw: line,
            }),
        }
    }

    Ok(LoadReport {
        header,
        books,
        skipped,
    })
}

/// Split one raw line into fields on commas outside double quotes.
///
/// Single left-to-right scan. Quote characters toggle the quoted state and are
/// dropped; everything else is kept verbatim (trimming happens during validation).
pub(crate) fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Validate one tokenized row into a [`Book`].
///
/// Checks run in a fixed order and the first failure decides the skip reason:
/// field count, rating, reviews, price, year. Title, author and genre are trimmed
/// text with no further validation (empty is allowed).
///
/// Price is validated as integer-formatted text but stored as a float. That
/// asymmetry is intentional; a price of `15.99` rejects the row.
pub(crate) fn parse_row(fields: &[String]) -> Result<Book, SkipReason> {
    if fields.len() < 7 {
        return Err(SkipReason::InsufficientColumns {
            found: fields.len(),
        });
    }

    let rating_raw = fields[2].trim();
    let rating: f64 = rating_raw.parse().map_err(|_| SkipReason::InvalidRating {
        raw: rating_raw.to_owned(),
    })?;

    let reviews_raw = fields[3].trim();
    let reviews: i64 = reviews_raw.parse().map_err(|_| SkipReason::InvalidReviews {
        raw: reviews_raw.to_owned(),
    })?;

    let price_raw = fields[4].trim();
    let price: i64 = price_raw.parse().map_err(|_| SkipReason::InvalidPrice {
        raw: price_raw.to_owned(),
    })?;

    let year_raw = fields[5].trim();
    let year: i32 = year_raw.parse().map_err(|_| SkipReason::InvalidYear {
        raw: year_raw.to_owned(),
    })?;

    Ok(Book {
        title: fields[0].trim().to_owned(),
        author: fields[1].trim().to_owned(),
        rating,
        reviews,
        price: price as f64,
        year,
        genre: fields[6].trim().to_owned(),
    })
}
