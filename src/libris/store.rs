//! The catalog store: an in-memory, insertion-ordered collection of books
//! with explicit load/save against a single JSON file.
//!
//! Persistence is deliberately coarse: the whole collection is rewritten
//! on every save, and a missing or unparsable file loads as an empty
//! catalog rather than an error.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{LibrisError, Result};
use crate::model::{Book, Status};

/// Searchable record fields. Parsing from the user-supplied field name
/// keeps the lookup a fixed dispatch table instead of reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl SearchField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "title" => Some(SearchField::Title),
            "author" => Some(SearchField::Author),
            "year" => Some(SearchField::Year),
            _ => None,
        }
    }

    fn value_of(&self, book: &Book) -> String {
        match self {
            SearchField::Title => book.title.clone(),
            SearchField::Author => book.author.clone(),
            SearchField::Year => book.year.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from `path`. A missing file, or a file that does
    /// not parse as a JSON array of objects, yields an empty catalog.
    /// A well-formed array whose records lack required fields is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(LibrisError::Io)?;
        let raw: Vec<Map<String, Value>> = match serde_json::from_str(&content) {
            Ok(raw) => raw,
            Err(_) => return Ok(Self::default()),
        };

        let books = raw.iter().map(Book::from_map).collect::<Result<Vec<_>>>()?;
        Ok(Self { books })
    }

    /// Write the whole catalog to `path` as a pretty-printed JSON array,
    /// replacing whatever was there.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let maps: Vec<Map<String, Value>> = self.books.iter().map(Book::to_map).collect();
        let content = serde_json::to_string_pretty(&maps).map_err(LibrisError::Serialization)?;
        fs::write(path, content).map_err(LibrisError::Io)?;
        Ok(())
    }

    /// Add a book with the next free id (one past the current maximum)
    /// and the default status. Returns the new record.
    pub fn add(&mut self, title: String, author: String, year: i32) -> Book {
        let id = self.books.iter().map(|b| b.id).max().unwrap_or(0).saturating_add(1);
        let book = Book::new(id, title, author, year);
        self.books.push(book.clone());
        book
    }

    /// Remove the first book with the given id. False if no such book.
    pub fn remove(&mut self, id: u32) -> bool {
        match self.books.iter().position(|b| b.id == id) {
            Some(pos) => {
                self.books.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring search over one field, in collection
    /// order. An unrecognized field name matches nothing.
    pub fn search(&self, query: &str, field: &str) -> Vec<&Book> {
        let Some(field) = SearchField::parse(field) else {
            return Vec::new();
        };
        let query = query.to_lowercase();

        self.books
            .iter()
            .filter(|b| field.value_of(b).to_lowercase().contains(&query))
            .collect()
    }

    /// Set the status of the book with the given id. False if the status
    /// string is not one of the two allowed values or the id is unknown.
    pub fn update_status(&mut self, id: u32, new_status: &str) -> bool {
        let Some(status) = Status::parse(new_status) else {
            return false;
        };
        match self.books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                book.status = status;
                true
            }
            None => false,
        }
    }

    pub fn list_all(&self) -> &[Book] {
        &self.books
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Library {
        let mut library = Library::new();
        library.add("Dune".into(), "Frank Herbert".into(), 1965);
        library.add("Solaris".into(), "Stanislaw Lem".into(), 1961);
        library.add("Neuromancer".into(), "William Gibson".into(), 1984);
        library
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let mut library = Library::new();
        let first = library.add("Dune".into(), "Herbert".into(), 1965);
        let second = library.add("Solaris".into(), "Lem".into(), 1961);

        assert_eq!(first.id, 1);
        assert_eq!(first.status, Status::Available);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn ids_stay_distinct_after_removing_a_lower_id() {
        let mut library = sample();
        assert!(library.remove(1));

        let next = library.add("Ubik".into(), "Philip K. Dick".into(), 1969);
        assert_eq!(next.id, 4);

        let mut ids: Vec<u32> = library.list_all().iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), library.list_all().len());
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut library = sample();
        assert!(!library.remove(42));
        assert_eq!(library.list_all().len(), 3);
    }

    #[test]
    fn remove_shrinks_by_exactly_one() {
        let mut library = sample();
        assert!(library.remove(2));
        assert_eq!(library.list_all().len(), 2);
        assert!(library.list_all().iter().all(|b| b.id != 2));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let library = sample();

        let hits = library.search("dUnE", "title");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Dune");

        let hits = library.search("herbert", "author");
        assert_eq!(hits.len(), 1);

        let hits = library.search("196", "year");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Dune");
        assert_eq!(hits[1].title, "Solaris");
    }

    #[test]
    fn search_unknown_field_matches_nothing() {
        let library = sample();
        assert!(library.search("Dune", "publisher").is_empty());
    }

    #[test]
    fn search_preserves_collection_order() {
        let library = sample();
        let hits = library.search("", "title");
        let titles: Vec<&str> = hits.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Dune", "Solaris", "Neuromancer"]);
    }

    #[test]
    fn update_status_mutates_only_the_target() {
        let mut library = sample();
        assert!(library.update_status(1, "checked out"));

        assert_eq!(library.list_all()[0].status, Status::CheckedOut);
        assert!(library.list_all()[1..]
            .iter()
            .all(|b| b.status == Status::Available));
    }

    #[test]
    fn update_status_unknown_id_fails() {
        let mut library = sample();
        assert!(!library.update_status(42, "checked out"));
        assert!(library
            .list_all()
            .iter()
            .all(|b| b.status == Status::Available));
    }

    #[test]
    fn update_status_rejects_invalid_status() {
        let mut library = sample();
        assert!(!library.update_status(1, "lost"));
        assert_eq!(library.list_all()[0].status, Status::Available);
    }
}
