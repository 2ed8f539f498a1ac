pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookEntity> {
    fn find_all(&self) -> LibraryResult<Vec<BookEntity>>;

    fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>>;

    fn find_by_year(&self, year: i32) -> LibraryResult<Vec<BookEntity>>;

    fn find_by_availability(&self, available: bool) -> LibraryResult<Vec<BookEntity>>;
}
