use serde::{Deserialize, Serialize};
use crate::books::dto::BookUpdate;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::check_availability_cmd::{CheckAvailabilityCommand, CheckAvailabilityCommandRequest, CheckAvailabilityCommandResponse};
use crate::catalog::command::count_books_cmd::{CountBooksCommand, CountBooksCommandRequest, CountBooksCommandResponse};
use crate::catalog::command::find_books_cmd::{FindBooksByAuthorCommandRequest, FindBooksByYearCommandRequest, FindBooksCommand, FindBooksCommandRequest, FindBooksCommandResponse};
use crate::catalog::command::generate_test_data_cmd::{GenerateTestDataCommand, GenerateTestDataCommandRequest, GenerateTestDataCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;

/// One catalog operation, as read from a script: `{"op": "remove_book", "title": "1984"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CatalogRequest {
    AddBook(AddBookCommandRequest),
    RemoveBook(RemoveBookCommandRequest),
    UpdateBook(UpdateBookCommandRequest),
    ListAllBooks,
    FindBooksByAuthor(FindBooksByAuthorCommandRequest),
    FindBooksByYear(FindBooksByYearCommandRequest),
    CheckAvailability(CheckAvailabilityCommandRequest),
    CountBooks,
    ListAvailableBooks,
    ListUnavailableBooks,
    GenerateTestData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CatalogResponse {
    Added(AddBookCommandResponse),
    Removed(RemoveBookCommandResponse),
    Updated(UpdateBookCommandResponse),
    Books(FindBooksCommandResponse),
    Availability(CheckAvailabilityCommandResponse),
    Count(CountBooksCommandResponse),
    TestData(GenerateTestDataCommandResponse),
}

pub type CatalogResult = Result<CatalogResponse, CommandError>;

pub struct CatalogController {
    catalog_service: Box<dyn CatalogService>,
}

impl CatalogController {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }

    pub fn handle(&mut self, req: CatalogRequest) -> CatalogResult {
        let svc = self.catalog_service.as_mut();
        match req {
            CatalogRequest::AddBook(req) => {
                AddBookCommand::new(svc).execute(req).map(CatalogResponse::Added)
            }
            CatalogRequest::RemoveBook(req) => {
                RemoveBookCommand::new(svc).execute(req).map(CatalogResponse::Removed)
            }
            CatalogRequest::UpdateBook(req) => {
                UpdateBookCommand::new(svc).execute(req).map(CatalogResponse::Updated)
            }
            CatalogRequest::ListAllBooks => {
                FindBooksCommand::new(svc).execute(FindBooksCommandRequest::All).map(CatalogResponse::Books)
            }
            CatalogRequest::FindBooksByAuthor(req) => {
                FindBooksCommand::new(svc).execute(req.into()).map(CatalogResponse::Books)
            }
            CatalogRequest::FindBooksByYear(req) => {
                FindBooksCommand::new(svc).execute(req.into()).map(CatalogResponse::Books)
            }
            CatalogRequest::CheckAvailability(req) => {
                CheckAvailabilityCommand::new(svc).execute(req).map(CatalogResponse::Availability)
            }
            CatalogRequest::CountBooks => {
                CountBooksCommand::new(svc).execute(CountBooksCommandRequest::default()).map(CatalogResponse::Count)
            }
            CatalogRequest::ListAvailableBooks => {
                FindBooksCommand::new(svc).execute(FindBooksCommandRequest::Available).map(CatalogResponse::Books)
            }
            CatalogRequest::ListUnavailableBooks => {
                FindBooksCommand::new(svc).execute(FindBooksCommandRequest::Unavailable).map(CatalogResponse::Books)
            }
            CatalogRequest::GenerateTestData => {
                GenerateTestDataCommand::new(svc).execute(GenerateTestDataCommandRequest::default()).map(CatalogResponse::TestData)
            }
        }
    }

    // Runs every request in order; a rejected request does not stop the script.
    pub fn run_script(&mut self, requests: Vec<CatalogRequest>) -> Vec<CatalogResult> {
        requests.into_iter().map(|req| self.handle(req)).collect()
    }

    pub fn catalog_service(&self) -> &dyn CatalogService {
        self.catalog_service.as_ref()
    }
}

pub fn parse_script(json: &str) -> LibraryResult<Vec<CatalogRequest>> {
    let requests: Vec<CatalogRequest> = serde_json::from_str(json)?;
    Ok(requests)
}

/// The demonstration session the `catalog demo` subcommand plays back.
pub fn sample_session() -> Vec<CatalogRequest> {
    vec![
        CatalogRequest::AddBook(AddBookCommandRequest::new("The Great Gatsby", "F. Scott Fitzgerald", 1925, true)),
        CatalogRequest::AddBook(AddBookCommandRequest::new("1984", "George Orwell", 1949, true)),
        CatalogRequest::AddBook(AddBookCommandRequest::new("To Kill a Mockingbird", "Harper Lee", 1960, true)),
        CatalogRequest::AddBook(AddBookCommandRequest::new("Pride and Prejudice", "Jane Austen", 1814, true)),
        CatalogRequest::AddBook(AddBookCommandRequest::new("Moby Dick", "Herman Melville", 1851, true)),
        CatalogRequest::RemoveBook(RemoveBookCommandRequest::new("1984")),
        CatalogRequest::RemoveBook(RemoveBookCommandRequest::new("A Book That Does Not Exist")),
        CatalogRequest::ListAllBooks,
        CatalogRequest::UpdateBook(UpdateBookCommandRequest::new(2, BookUpdate::new().with_available(false))),
        CatalogRequest::FindBooksByAuthor(FindBooksByAuthorCommandRequest::new("Jane Austen")),
        CatalogRequest::FindBooksByYear(FindBooksByYearCommandRequest::new(1960)),
        CatalogRequest::CheckAvailability(CheckAvailabilityCommandRequest::new("The Great Gatsby")),
        CatalogRequest::GenerateTestData,
        CatalogRequest::ListAllBooks,
        CatalogRequest::CountBooks,
        CatalogRequest::ListAvailableBooks,
        CatalogRequest::ListUnavailableBooks,
    ]
}
