use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GenerateTestDataCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> GenerateTestDataCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateTestDataCommandRequest {}

// One entry per insertion attempt, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateTestDataCommandResponse {
    pub outcomes: Vec<Result<BookDto, CommandError>>,
}

impl<'a> Command<GenerateTestDataCommandRequest, GenerateTestDataCommandResponse> for GenerateTestDataCommand<'a> {
    fn execute(&mut self, _req: GenerateTestDataCommandRequest) -> Result<GenerateTestDataCommandResponse, CommandError> {
        let outcomes = self.catalog_service.generate_test_data().into_iter()
            .map(|res| res.map_err(CommandError::from))
            .collect();
        Ok(GenerateTestDataCommandResponse { outcomes })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::generate_test_data_cmd::{GenerateTestDataCommand, GenerateTestDataCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_generate_test_data() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let _ = svc.add_book(&BookDto::new("Book C", "Someone", 1999, false)).expect("should add book");

        let res = GenerateTestDataCommand::new(svc.as_mut()).execute(GenerateTestDataCommandRequest::default())
            .expect("should generate books");
        assert_eq!(5, res.outcomes.len());
        assert!(matches!(res.outcomes[2], Err(CommandError::DuplicateKey{ ref key, .. }) if key == "Book C"));
        assert_eq!(4, res.outcomes.iter().filter(|o| o.is_ok()).count());
        assert_eq!(5, svc.count_books());
    }
}
