use serde::{Deserialize, Serialize};

// Identifiable defines the key shared by catalog records
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}


// Configuration abstracts config options for a catalog instance
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub test_data_base_year: i32,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            test_data_base_year: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(2000, config.test_data_base_year);
    }

    #[test]
    fn test_should_load_config_from_json() {
        let config: Configuration = serde_json::from_str(
            r#"{"branch_id": "east", "test_data_base_year": 1990}"#).expect("should parse config");
        assert_eq!("east", config.branch_id.as_str());
        assert_eq!(1990, config.test_data_base_year);
    }
}
