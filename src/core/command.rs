use serde::Serialize;
use crate::core::library::LibraryError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum CommandError {
    DuplicateKey {
        message: String,
        key: String,
    },
    NotFound {
        message: String,
        key: String,
    },
    InvalidIndex {
        message: String,
        index: usize,
        size: usize,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateKey { message, key } => {
                CommandError::DuplicateKey { message, key }
            }
            LibraryError::NotFound { message, key } => {
                CommandError::NotFound { message, key }
            }
            LibraryError::InvalidIndex { message, index, size } => {
                CommandError::InvalidIndex { message, index, size }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::duplicate_key("test", "k")), CommandError::DuplicateKey{ message: _, key: _ }));
        assert!(matches!(CommandError::from(LibraryError::not_found("test", "k")), CommandError::NotFound{ message: _, key: _ }));
        assert!(matches!(CommandError::from(LibraryError::invalid_index("test", 1, 0)), CommandError::InvalidIndex{ message: _, index: 1, size: 0 }));
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)), CommandError::Validation{ message: _, reason_code: _ }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")), CommandError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_serialize_command_error_with_tag() {
        let err = CommandError::from(LibraryError::not_found("book 1984 not found", "1984"));
        let json = serde_json::to_value(&err).expect("should serialize error");
        assert_eq!("not_found", json["error"]);
        assert_eq!("1984", json["key"]);
    }
}
