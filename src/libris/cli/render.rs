use colored::*;
use libris::model::{Book, Status};
use unicode_width::UnicodeWidthStr;

const TITLE_WIDTH: usize = 28;
const AUTHOR_WIDTH: usize = 22;

pub fn print_book(book: &Book) {
    let status = match book.status {
        Status::Available => book.status.as_str().green(),
        Status::CheckedOut => book.status.as_str().yellow(),
    };

    println!(
        "{:>4}  {}  {}  {:>4}  {}",
        book.id,
        pad_to_width(&book.title, TITLE_WIDTH),
        pad_to_width(&book.author, AUTHOR_WIDTH),
        book.year,
        status
    );
}

pub fn print_books<'a, I>(books: I)
where
    I: IntoIterator<Item = &'a Book>,
{
    for book in books {
        print_book(book);
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
