use std::collections::HashMap;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// Field filter parsed from a query predicate.
#[derive(Debug, PartialEq)]
enum BookFilter {
    Title(String),
    Author(String),
    Year(i32),
    Available(bool),
}

impl BookFilter {
    fn parse(field: &str, value: &str) -> LibraryResult<BookFilter> {
        match field {
            "title" => Ok(BookFilter::Title(value.to_string())),
            "author" => Ok(BookFilter::Author(value.to_string())),
            "year" => value.parse::<i32>().map(BookFilter::Year).map_err(|err| {
                LibraryError::validation(format!("invalid year {:?}: {}", value, err).as_str(), Some("year".to_string()))
            }),
            "available" => value.parse::<bool>().map(BookFilter::Available).map_err(|err| {
                LibraryError::validation(format!("invalid availability {:?}: {}", value, err).as_str(), Some("available".to_string()))
            }),
            _ => Err(LibraryError::validation(
                format!("unsupported book predicate {}", field).as_str(), None)),
        }
    }

    fn matches(&self, book: &BookEntity) -> bool {
        match self {
            BookFilter::Title(title) => book.title() == title,
            BookFilter::Author(author) => book.author() == author,
            BookFilter::Year(year) => book.year() == *year,
            BookFilter::Available(available) => book.is_available() == *available,
        }
    }
}

/// Ordered in-memory store. Lookups are linear scans over insertion order.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: vec![],
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|b| b.id() == id)
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        if self.position(entity.id().as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("book {} already exists", entity.id()).as_str(), entity.id().as_str()));
        }
        self.books.push(entity.clone());
        Ok(self.books.len() - 1)
    }

    fn update(&mut self, index: usize, entity: &BookEntity) -> LibraryResult<usize> {
        let size = self.books.len();
        match self.books.get_mut(index) {
            Some(book) => {
                *book = entity.clone();
                Ok(index)
            }
            None => Err(LibraryError::invalid_index(
                format!("book index {} is out of range", index).as_str(), index, size)),
        }
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.iter().find(|b| b.id() == id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", id).as_str(), id))
    }

    fn get_at(&self, index: usize) -> LibraryResult<BookEntity> {
        self.books.get(index).cloned()
            .ok_or_else(|| LibraryError::invalid_index(
                format!("book index {} is out of range", index).as_str(), index, self.books.len()))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<BookEntity> {
        match self.position(id) {
            Some(ndx) => Ok(self.books.remove(ndx)),
            None => Err(LibraryError::not_found(format!("book {} not found", id).as_str(), id)),
        }
    }

    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        let filters = predicate.iter()
            .map(|(k, v)| BookFilter::parse(k.as_str(), v.as_str()))
            .collect::<LibraryResult<Vec<BookFilter>>>()?;
        Ok(self.books.iter()
            .filter(|book| filters.iter().all(|f| f.matches(book)))
            .cloned()
            .collect())
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        self.query(&HashMap::new())
    }

    fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>> {
        let predicate = HashMap::from([
            ("author".to_string(), author.to_string()),
        ]);
        self.query(&predicate)
    }

    fn find_by_year(&self, year: i32) -> LibraryResult<Vec<BookEntity>> {
        let predicate = HashMap::from([
            ("year".to_string(), year.to_string()),
        ]);
        self.query(&predicate)
    }

    fn find_by_availability(&self, available: bool) -> LibraryResult<Vec<BookEntity>> {
        let predicate = HashMap::from([
            ("available".to_string(), available.to_string()),
        ]);
        self.query(&predicate)
    }
}
