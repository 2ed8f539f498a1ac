use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity abstracts one catalog record. The title doubles as its key, there
// is no surrogate id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub available: bool,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year: i32, available: bool) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            available,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.title.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn is_available(&self) -> bool {
        self.available
    }
}


#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new("1984", "George Orwell", 1949, true);
        assert_eq!("1984", book.id().as_str());
        assert_eq!("George Orwell", book.author());
        assert_eq!(1949, book.year());
        assert!(book.is_available());
    }

    #[test]
    fn test_should_accept_unvalidated_fields() {
        let book = BookEntity::new("", "", -350, false);
        assert_eq!("", book.title());
        assert_eq!(-350, book.year());
    }
}
