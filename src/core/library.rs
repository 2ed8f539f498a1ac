use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
        key: String,
    },
    NotFound {
        message: String,
        key: String,
    },
    // Positional access outside of [0, size). Nothing is mutated when this is returned.
    InvalidIndex {
        message: String,
        index: usize,
        size: usize,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str, key: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string(), key: key.to_string() }
    }

    pub fn not_found(message: &str, key: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string(), key: key.to_string() }
    }

    pub fn invalid_index(message: &str, index: usize, size: usize) -> LibraryError {
        LibraryError::InvalidIndex { message: message.to_string(), index, size }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::InvalidIndex { message, index, size } => {
                write!(f, "{} (index {}, size {})", message, index, size)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Snapshot of the records matched by a listing or filter, in catalog order.
///
/// An empty listing is a normal outcome, not an error; callers tell the two
/// states apart with [`Listing::is_empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub records: Vec<T>,
}

impl<T> Listing<T> {
    pub fn new(records: Vec<T>) -> Self {
        Listing {
            records,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterates records together with their 1-based position in the listing.
    /// Every call starts over from the first record.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + Clone + '_ {
        self.records.iter().enumerate().map(|(ndx, record)| (ndx + 1, record))
    }
}
