use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct CountBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> CountBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountBooksCommandRequest {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountBooksCommandResponse {
    pub count: usize,
}

impl<'a> Command<CountBooksCommandRequest, CountBooksCommandResponse> for CountBooksCommand<'a> {
    fn execute(&mut self, _req: CountBooksCommandRequest) -> Result<CountBooksCommandResponse, CommandError> {
        Ok(CountBooksCommandResponse { count: self.catalog_service.count_books() })
    }
}
