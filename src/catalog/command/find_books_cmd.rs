use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::Listing;

pub struct FindBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> FindBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// FindBooksCommandRequest selects which records a listing contains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum FindBooksCommandRequest {
    All,
    Author { author: String },
    Year { year: i32 },
    Available,
    Unavailable,
}

impl FindBooksCommandRequest {
    pub fn by_author(author: &str) -> Self {
        FindBooksCommandRequest::Author { author: author.to_string() }
    }

    pub fn by_year(year: i32) -> Self {
        FindBooksCommandRequest::Year { year }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindBooksByAuthorCommandRequest {
    pub author: String,
}

impl FindBooksByAuthorCommandRequest {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
        }
    }
}

impl From<FindBooksByAuthorCommandRequest> for FindBooksCommandRequest {
    fn from(other: FindBooksByAuthorCommandRequest) -> Self {
        FindBooksCommandRequest::Author { author: other.author }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindBooksByYearCommandRequest {
    pub year: i32,
}

impl FindBooksByYearCommandRequest {
    pub fn new(year: i32) -> Self {
        Self {
            year,
        }
    }
}

impl From<FindBooksByYearCommandRequest> for FindBooksCommandRequest {
    fn from(other: FindBooksByYearCommandRequest) -> Self {
        FindBooksCommandRequest::Year { year: other.year }
    }
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindBooksCommandResponse {
    pub criteria: FindBooksCommandRequest,
    pub books: Listing<BookDto>,
}

impl FindBooksCommandResponse {
    pub fn new(criteria: FindBooksCommandRequest, books: Listing<BookDto>) -> Self {
        Self {
            criteria,
            books,
        }
    }
}

impl<'a> Command<FindBooksCommandRequest, FindBooksCommandResponse> for FindBooksCommand<'a> {
    fn execute(&mut self, req: FindBooksCommandRequest) -> Result<FindBooksCommandResponse, CommandError> {
        let books = match &req {
            FindBooksCommandRequest::All => self.catalog_service.list_all_books(),
            FindBooksCommandRequest::Author { author } => self.catalog_service.find_books_by_author(author.as_str()),
            FindBooksCommandRequest::Year { year } => self.catalog_service.find_books_by_year(*year),
            FindBooksCommandRequest::Available => self.catalog_service.list_available_books(),
            FindBooksCommandRequest::Unavailable => self.catalog_service.list_unavailable_books(),
        }?;
        Ok(FindBooksCommandResponse::new(req, books))
    }
}
