use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDto, BookUpdate};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> UpdateBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub index: usize,
    #[serde(default)]
    pub update: BookUpdate,
}

impl UpdateBookCommandRequest {
    pub fn new(index: usize, update: BookUpdate) -> Self {
        Self {
            index,
            update,
        }
    }
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateBookCommandResponse {
    pub index: usize,
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(index: usize, book: BookDto) -> Self {
        Self {
            index,
            book,
        }
    }
}

impl<'a> Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand<'a> {
    fn execute(&mut self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.index, &req.update)
            .map_err(CommandError::from).map(|book| UpdateBookCommandResponse::new(req.index, book))
    }
}
