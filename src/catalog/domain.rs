pub mod service;

use crate::books::dto::{BookDto, BookUpdate};
use crate::core::library::{LibraryResult, Listing};

/// Ordered collection of book records and every operation on it.
///
/// Titles are unique on insertion. Positions are zero-based for
/// [`CatalogService::update_book`]; listings number records from one.
pub trait CatalogService: Sync + Send {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, title: &str) -> LibraryResult<BookDto>;
    // Title uniqueness is not rechecked when the update renames a book.
    fn update_book(&mut self, index: usize, update: &BookUpdate) -> LibraryResult<BookDto>;
    fn list_all_books(&self) -> LibraryResult<Listing<BookDto>>;
    fn find_books_by_author(&self, author: &str) -> LibraryResult<Listing<BookDto>>;
    fn find_books_by_year(&self, year: i32) -> LibraryResult<Listing<BookDto>>;
    fn check_availability(&self, title: &str) -> LibraryResult<bool>;
    fn count_books(&self) -> usize;
    fn list_available_books(&self) -> LibraryResult<Listing<BookDto>>;
    fn list_unavailable_books(&self) -> LibraryResult<Listing<BookDto>>;
    fn generate_test_data(&mut self) -> Vec<LibraryResult<BookDto>>;
}
