use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct CheckAvailabilityCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> CheckAvailabilityCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckAvailabilityCommandRequest {
    pub title: String,
}

impl CheckAvailabilityCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckAvailabilityCommandResponse {
    pub title: String,
    pub available: bool,
}

impl<'a> Command<CheckAvailabilityCommandRequest, CheckAvailabilityCommandResponse> for CheckAvailabilityCommand<'a> {
    fn execute(&mut self, req: CheckAvailabilityCommandRequest) -> Result<CheckAvailabilityCommandResponse, CommandError> {
        self.catalog_service.check_availability(req.title.as_str())
            .map_err(CommandError::from)
            .map(|available| CheckAvailabilityCommandResponse { title: req.title, available })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::check_availability_cmd::{CheckAvailabilityCommand, CheckAvailabilityCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_check_availability() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let _ = svc.add_book(&BookDto::new("Moby Dick", "Herman Melville", 1851, false)).expect("should add book");
        let mut cmd = CheckAvailabilityCommand::new(svc.as_ref());

        let res = cmd.execute(CheckAvailabilityCommandRequest::new("Moby Dick")).expect("should find book");
        assert!(!res.available);
        let res = cmd.execute(CheckAvailabilityCommandRequest::new("moby dick"));
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
    }
}
