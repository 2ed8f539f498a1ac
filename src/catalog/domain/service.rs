use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookUpdate};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, Listing};

const TEST_DATA_TITLES: [&str; 5] = ["Book A", "Book B", "Book C", "Book D", "Book @"];

pub struct CatalogServiceImpl {
    branch_id: String,
    test_data_base_year: i32,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            test_data_base_year: config.test_data_base_year,
            book_repository,
        }
    }

    fn to_listing(books: Vec<BookEntity>) -> Listing<BookDto> {
        let listing = Listing::new(books.iter().map(BookDto::from).collect::<Vec<_>>());
        debug!(matches = listing.len(), "listing built");
        listing
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        match self.book_repository.create(&BookEntity::from(book)) {
            Ok(ndx) => {
                info!(branch = %self.branch_id, title = %book.title, position = ndx, "book added");
                Ok(book.clone())
            }
            Err(err) => {
                warn!(branch = %self.branch_id, title = %book.title, "book rejected: {}", err);
                Err(err)
            }
        }
    }

    fn remove_book(&mut self, title: &str) -> LibraryResult<BookDto> {
        match self.book_repository.delete(title) {
            Ok(removed) => {
                info!(branch = %self.branch_id, title = %title, "book removed");
                Ok(BookDto::from(&removed))
            }
            Err(err) => {
                warn!(branch = %self.branch_id, title = %title, "book not removed: {}", err);
                Err(err)
            }
        }
    }

    fn update_book(&mut self, index: usize, update: &BookUpdate) -> LibraryResult<BookDto> {
        let mut book = self.book_repository.get_at(index).map_err(|err| {
            warn!(branch = %self.branch_id, index, "book not updated: {}", err);
            err
        })?;
        apply_update(&mut book, update);
        let _ = self.book_repository.update(index, &book)?;
        info!(branch = %self.branch_id, index, title = %book.title, "book updated");
        Ok(BookDto::from(&book))
    }

    fn list_all_books(&self) -> LibraryResult<Listing<BookDto>> {
        debug!(branch = %self.branch_id, "listing all books");
        self.book_repository.find_all().map(Self::to_listing)
    }

    fn find_books_by_author(&self, author: &str) -> LibraryResult<Listing<BookDto>> {
        debug!(branch = %self.branch_id, author = %author, "finding books by author");
        self.book_repository.find_by_author(author).map(Self::to_listing)
    }

    fn find_books_by_year(&self, year: i32) -> LibraryResult<Listing<BookDto>> {
        debug!(branch = %self.branch_id, year, "finding books by year");
        self.book_repository.find_by_year(year).map(Self::to_listing)
    }

    fn check_availability(&self, title: &str) -> LibraryResult<bool> {
        debug!(branch = %self.branch_id, title = %title, "checking availability");
        self.book_repository.get(title).map(|b| b.available)
    }

    fn count_books(&self) -> usize {
        self.book_repository.count()
    }

    fn list_available_books(&self) -> LibraryResult<Listing<BookDto>> {
        debug!(branch = %self.branch_id, "listing available books");
        self.book_repository.find_by_availability(true).map(Self::to_listing)
    }

    fn list_unavailable_books(&self) -> LibraryResult<Listing<BookDto>> {
        debug!(branch = %self.branch_id, "listing unavailable books");
        self.book_repository.find_by_availability(false).map(Self::to_listing)
    }

    fn generate_test_data(&mut self) -> Vec<LibraryResult<BookDto>> {
        let base_year = self.test_data_base_year;
        TEST_DATA_TITLES.iter().enumerate().map(|(i, title)| {
            let year = base_year.checked_add(i as i32).ok_or_else(|| {
                warn!(branch = %self.branch_id, title = %title, base_year, "test book year out of range");
                LibraryError::validation(format!("year of {} is out of range for base year {}", title, base_year).as_str(),
                                         Some("year_overflow".to_string()))
            })?;
            let book = BookDto::new(title, format!("Author {}", i + 1).as_str(), year, i % 2 == 0);
            self.add_book(&book)
        }).collect()
    }
}

// Overwrites only the fields present in the update.
fn apply_update(book: &mut BookEntity, update: &BookUpdate) {
    if let Some(title) = &update.title {
        book.title = title.to_string();
    }
    if let Some(author) = &update.author {
        book.author = author.to_string();
    }
    if let Some(year) = update.year {
        book.year = year;
    }
    if let Some(available) = update.available {
        book.available = available;
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            available: other.available,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            available: other.available,
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::books::dto::{BookDto, BookUpdate};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;

    fn new_service() -> Box<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"))
    }

    #[test]
    fn test_should_add_book() {
        let mut catalog_svc = new_service();

        let book = BookDto::new("1984", "George Orwell", 1949, true);
        let added = catalog_svc.add_book(&book).expect("should add book");
        assert_eq!(book, added);
        assert_eq!(1, catalog_svc.count_books());
        assert!(catalog_svc.check_availability("1984").expect("should find book"));
    }

    #[test]
    fn test_should_reject_duplicate_book() {
        let mut catalog_svc = new_service();

        let _ = catalog_svc.add_book(&BookDto::new("1984", "George Orwell", 1949, true)).expect("should add book");
        let res = catalog_svc.add_book(&BookDto::new("1984", "Other", 1950, false));
        assert!(matches!(res, Err(LibraryError::DuplicateKey{ ref key, .. }) if key == "1984"));
        assert_eq!(1, catalog_svc.count_books());
    }

    #[test]
    fn test_should_update_book() {
        let mut catalog_svc = new_service();

        let _ = catalog_svc.add_book(&BookDto::new("1984", "George Orwell", 1949, true)).expect("should add book");
        let updated = catalog_svc.update_book(0, &BookUpdate::new().with_title("Animal Farm").with_year(1945))
            .expect("should update book");
        assert_eq!(BookDto::new("Animal Farm", "George Orwell", 1945, true), updated);

        let listing = catalog_svc.list_all_books().expect("should list books");
        assert_eq!(vec![updated], listing.records);
    }

    #[test]
    fn test_should_reject_update_with_invalid_index() {
        let mut catalog_svc = new_service();

        let book = BookDto::new("1984", "George Orwell", 1949, true);
        let _ = catalog_svc.add_book(&book).expect("should add book");
        let res = catalog_svc.update_book(1, &BookUpdate::new().with_available(false));
        assert!(matches!(res, Err(LibraryError::InvalidIndex{ index: 1, size: 1, .. })));
        assert_eq!(vec![book], catalog_svc.list_all_books().expect("should list books").records);
    }

    #[test]
    fn test_should_allow_update_to_duplicate_title() {
        let mut catalog_svc = new_service();

        let _ = catalog_svc.add_book(&BookDto::new("1984", "George Orwell", 1949, true)).expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("Dune", "Frank Herbert", 1965, true)).expect("should add book");
        let updated = catalog_svc.update_book(1, &BookUpdate::new().with_title("1984")).expect("should update book");
        assert_eq!("1984", updated.title.as_str());
        assert_eq!(2, catalog_svc.count_books());

        // removal takes the first match
        let removed = catalog_svc.remove_book("1984").expect("should remove book");
        assert_eq!("George Orwell", removed.author.as_str());
        assert!(catalog_svc.check_availability("1984").is_ok());
    }

    #[test]
    fn test_should_remove_book() {
        let mut catalog_svc = new_service();

        let _ = catalog_svc.add_book(&BookDto::new("1984", "George Orwell", 1949, true)).expect("should add book");
        let removed = catalog_svc.remove_book("1984").expect("should remove book");
        assert_eq!("1984", removed.title.as_str());

        let res = catalog_svc.check_availability("1984");
        assert!(matches!(res, Err(LibraryError::NotFound{ .. })));
        let res = catalog_svc.remove_book("1984");
        assert!(matches!(res, Err(LibraryError::NotFound{ .. })));
        assert_eq!(0, catalog_svc.count_books());
    }

    #[test]
    fn test_should_find_by_author_and_year() {
        let mut catalog_svc = new_service();

        let _ = catalog_svc.add_book(&BookDto::new("Emma", "Jane Austen", 1815, true)).expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("Dune", "Frank Herbert", 1965, true)).expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("Persuasion", "Jane Austen", 1817, false)).expect("should add book");

        let res = catalog_svc.find_books_by_author("Jane Austen").expect("should find books");
        assert_eq!(vec!["Emma", "Persuasion"], res.records.iter().map(|b| b.title.as_str()).collect::<Vec<_>>());
        let res = catalog_svc.find_books_by_year(1965).expect("should find books");
        assert_eq!(1, res.len());
        let res = catalog_svc.find_books_by_year(1960).expect("should find books");
        assert!(res.is_empty());
    }

    #[test]
    fn test_should_generate_test_data() {
        let mut catalog_svc = new_service();

        let res = catalog_svc.generate_test_data();
        assert_eq!(5, res.len());
        assert!(res.iter().all(|r| r.is_ok()));
        let listing = catalog_svc.list_all_books().expect("should list books");
        assert_eq!(BookDto::new("Book A", "Author 1", 2000, true), listing.records[0]);
        assert_eq!(BookDto::new("Book @", "Author 5", 2004, true), listing.records[4]);
        assert_eq!(3, catalog_svc.list_available_books().expect("should list books").len());
        assert_eq!(2, catalog_svc.list_unavailable_books().expect("should list books").len());

        let res = catalog_svc.generate_test_data();
        assert!(res.iter().all(|r| matches!(r, Err(LibraryError::DuplicateKey{ .. }))));
        assert_eq!(5, catalog_svc.count_books());
    }

    #[test]
    fn test_should_use_configured_base_year() {
        let mut config = Configuration::new("test");
        config.test_data_base_year = 1990;
        let mut catalog_svc = factory::create_catalog_service(&config);

        let _ = catalog_svc.generate_test_data();
        let years: Vec<i32> = catalog_svc.list_all_books().expect("should list books")
            .records.iter().map(|b| b.year).collect();
        assert_eq!(vec![1990, 1991, 1992, 1993, 1994], years);
    }

    #[test]
    fn test_should_reject_test_data_years_past_max() {
        let mut config = Configuration::new("test");
        config.test_data_base_year = i32::MAX - 1;
        let mut catalog_svc = factory::create_catalog_service(&config);

        let res = catalog_svc.generate_test_data();
        assert_eq!(5, res.len());
        assert_eq!(Some(i32::MAX - 1), res[0].as_ref().ok().map(|b| b.year));
        assert_eq!(Some(i32::MAX), res[1].as_ref().ok().map(|b| b.year));
        assert!(res[2..].iter().all(|r| matches!(r, Err(LibraryError::Validation{ .. }))));
        assert_eq!(2, catalog_svc.count_books());
    }
}
