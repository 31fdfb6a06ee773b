//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    /// Shelf location within the library
    pub location: String,
    /// False while an active loan references this book
    pub available: bool,
}

impl Book {
    /// Display label shown in catalog search results
    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Yes"
        } else {
            "No"
        }
    }
}

/// Book row shaped for catalog search results
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookSummary {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub location: String,
    pub available: bool,
    /// Display string derived from `available`
    pub availability: String,
}

impl From<Book> for BookSummary {
    fn from(book: Book) -> Self {
        let availability = book.availability_label().to_string();
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            location: book.location,
            available: book.available,
            availability,
        }
    }
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
}
