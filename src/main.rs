//! Interactive menu over a loaded book catalog.
//!
//! Presentation glue only: every prompt, parse and format lives here; all business
//! logic lives in the library's loader and [`Catalog`].

use std::io::{self, BufRead, Lines, StdinLock, Write};
use std::process::ExitCode;
use std::sync::Arc;

use bookshelf::loader::{self, LoadOptions, StdErrObserver};
use bookshelf::query::Catalog;
use bookshelf::types::Book;

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data.csv".to_string());

    println!("Loading books from {path}...");
    let options = LoadOptions {
        observer: Some(Arc::new(StdErrObserver)),
        ..Default::default()
    };
    let report = match loader::load_from_path(&path, &options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Loaded {} books ({} rows skipped).",
        report.book_count(),
        report.skip_count()
    );

    let catalog = Catalog::new(report.books);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "Enter your choice (1-7): ") else {
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(author) = prompt(&mut lines, "Enter author name: ") else {
                    break;
                };
                println!(
                    "Total books by {}: {}",
                    author.trim(),
                    catalog.count_by_author(&author)
                );
            }
            "2" => print_all_authors(&catalog),
            "3" => {
                let Some(author) = prompt(&mut lines, "Enter author name: ") else {
                    break;
                };
                print_titles_by_author(&catalog, &author);
            }
            "4" => {
                let Some(raw) = prompt(&mut lines, "Enter rating (e.g. 4.7): ") else {
                    break;
                };
                match raw.trim().parse::<f64>() {
                    Ok(rating) => print_books_by_rating(&catalog, rating),
                    Err(_) => println!("Invalid rating: '{}'", raw.trim()),
                }
            }
            "5" => {
                let Some(author) = prompt(&mut lines, "Enter author name: ") else {
                    break;
                };
                print_prices_by_author(&catalog, &author);
            }
            "6" => print_sample(&catalog),
            "7" => {
                println!("Goodbye!");
                break;
            }
            other => println!("Invalid choice '{other}'. Please enter 1-7."),
        }
    }

    ExitCode::SUCCESS
}

/// Print `message`, then read one line. `None` on end of input.
fn prompt(lines: &mut Lines<StdinLock<'_>>, message: &str) -> Option<String> {
    print!("{message}");
    let _ = io::stdout().flush();
    lines.next()?.ok()
}

fn print_menu() {
    println!();
    println!("{}", "=".repeat(50));
    println!("           BOOK MANAGEMENT SYSTEM");
    println!("{}", "=".repeat(50));
    println!("1. Count books by author");
    println!("2. Show all authors");
    println!("3. Show books by author");
    println!("4. Find books by rating");
    println!("5. Show book prices by author");
    println!("6. Show sample data");
    println!("7. Exit");
    println!("{}", "=".repeat(50));
}

fn print_all_authors(catalog: &Catalog) {
    let mut authors: Vec<&str> = catalog.distinct_authors().into_iter().collect();
    authors.sort_unstable();

    println!("\n=== All Authors ===");
    for (i, author) in authors.iter().enumerate() {
        println!("{}. {author}", i + 1);
    }
    println!("Total authors: {}", authors.len());
}

fn print_titles_by_author(catalog: &Catalog, author: &str) {
    let titles = catalog.titles_by_author(author);
    if titles.is_empty() {
        println!("No books found for author: {}", author.trim());
        return;
    }

    println!("\n=== Books by {} ===", author.trim());
    for (i, title) in titles.iter().enumerate() {
        println!("{}. {title}", i + 1);
    }
    println!("Total books: {}", titles.len());
}

fn print_books_by_rating(catalog: &Catalog, rating: f64) {
    let books = catalog.books_by_rating(rating);
    if books.is_empty() {
        println!("No books found with rating: {rating}");
        return;
    }

    println!("\n=== Books with rating {rating} ===");
    for (i, book) in books.iter().enumerate() {
        println!("{}. {} by {}", i + 1, book.title, book.author);
    }
    println!("Total books: {}", books.len());
}

fn print_prices_by_author(catalog: &Catalog, author: &str) {
    let prices = catalog.prices_by_author(author);
    if prices.is_empty() {
        println!("No books found for author: {}", author.trim());
        return;
    }

    println!("\n=== Book Prices by {} ===", author.trim());
    let mut total = 0.0;
    for (i, (title, price)) in prices.iter().enumerate() {
        println!("{}. {title} - ${price}", i + 1);
        total += price;
    }
    println!("Total books: {}", prices.len());
    println!("Total price: ${total}");
    println!("Average price: ${:.2}", total / prices.len() as f64);
}

fn print_sample(catalog: &Catalog) {
    println!("\n=== Sample Books (First 5) ===");
    for book in catalog.books().iter().take(5) {
        print_details(book);
    }
}

fn print_details(book: &Book) {
    println!(
        "{} by {} ({}) - {} | rating {} | {} reviews | ${}",
        book.title, book.author, book.year, book.genre, book.rating, book.reviews, book.price
    );
}
