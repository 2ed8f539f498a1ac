use clap::ValueEnum;
use serde::Serialize;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::command::find_books_cmd::{FindBooksCommandRequest, FindBooksCommandResponse};
use crate::catalog::controller::{CatalogResponse, CatalogResult};
use crate::core::command::CommandError;
use crate::core::library::LibraryResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonReport<'a> {
    Ok { response: &'a CatalogResponse },
    Error { error: &'a CommandError },
}

pub fn render(result: &CatalogResult, format: ReportFormat) -> LibraryResult<Vec<String>> {
    match format {
        ReportFormat::Text => Ok(render_text(result)),
        ReportFormat::Json => render_json(result).map(|line| vec![line]),
    }
}

pub fn render_json(result: &CatalogResult) -> LibraryResult<String> {
    let report = match result {
        Ok(response) => JsonReport::Ok { response },
        Err(error) => JsonReport::Error { error },
    };
    Ok(serde_json::to_string(&report)?)
}

pub fn render_text(result: &CatalogResult) -> Vec<String> {
    match result {
        Ok(response) => render_response(response),
        Err(err) => vec![render_error(err)],
    }
}

fn render_response(response: &CatalogResponse) -> Vec<String> {
    match response {
        CatalogResponse::Added(res) => vec![added_line(&res.book)],
        CatalogResponse::Removed(res) => vec![format!("Book \"{}\" removed from the catalog.", res.book.title)],
        CatalogResponse::Updated(res) => vec![format!("Book \"{}\" updated.", res.book.title)],
        CatalogResponse::Books(res) => render_books(res),
        CatalogResponse::Availability(res) => {
            let state = if res.available { "available" } else { "unavailable" };
            vec![format!("Book \"{}\" is {}.", res.title, state)]
        }
        CatalogResponse::Count(res) => vec![format!("Number of books in the catalog: {}", res.count)],
        CatalogResponse::TestData(res) => res.outcomes.iter().map(|outcome| match outcome {
            Ok(book) => added_line(book),
            Err(err) => render_error(err),
        }).collect(),
    }
}

fn added_line(book: &BookDto) -> String {
    format!("Book \"{}\" added to the catalog.", book.title)
}

fn render_error(err: &CommandError) -> String {
    match err {
        CommandError::DuplicateKey { key, .. } => format!("Book \"{}\" already exists in the catalog.", key),
        CommandError::NotFound { key, .. } => format!("Book \"{}\" not found.", key),
        CommandError::InvalidIndex { index, .. } => format!("Invalid book index {}.", index),
        CommandError::Serialization { message } => format!("Error: {}", message),
        CommandError::Validation { message, .. } => format!("Error: {}", message),
    }
}

fn render_books(res: &FindBooksCommandResponse) -> Vec<String> {
    let (empty, header) = match &res.criteria {
        FindBooksCommandRequest::All => {
            ("The catalog is empty.".to_string(), "Books:".to_string())
        }
        FindBooksCommandRequest::Author { author } => {
            (format!("No books by author \"{}\" found.", author), format!("Books by author \"{}\":", author))
        }
        FindBooksCommandRequest::Year { year } => {
            (format!("No books published in {} found.", year), format!("Books published in {}:", year))
        }
        FindBooksCommandRequest::Available => {
            ("No available books.".to_string(), "Available books:".to_string())
        }
        FindBooksCommandRequest::Unavailable => {
            ("No unavailable books.".to_string(), "Unavailable books:".to_string())
        }
    };
    if res.books.is_empty() {
        return vec![empty];
    }
    let mut lines = vec![header];
    lines.extend(res.books.iter().map(|(pos, book)| book_line(pos, book, &res.criteria)));
    lines
}

// The field a listing is filtered on is left out of its lines.
fn book_line(pos: usize, book: &impl Book, criteria: &FindBooksCommandRequest) -> String {
    let available = if book.is_available() { "Yes" } else { "No" };
    match criteria {
        FindBooksCommandRequest::All => format!("{}. Title: \"{}\", Author: {}, Year: {}, Available: {}",
                                                pos, book.title(), book.author(), book.year(), available),
        FindBooksCommandRequest::Author { .. } => format!("{}. Title: \"{}\", Year: {}, Available: {}",
                                                         pos, book.title(), book.year(), available),
        FindBooksCommandRequest::Year { .. } => format!("{}. Title: \"{}\", Author: {}, Available: {}",
                                                       pos, book.title(), book.author(), available),
        FindBooksCommandRequest::Available | FindBooksCommandRequest::Unavailable => {
            format!("{}. Title: \"{}\", Author: {}, Year: {}", pos, book.title(), book.author(), book.year())
        }
    }
}
