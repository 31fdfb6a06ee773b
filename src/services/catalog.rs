//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookSummary, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new book in the catalog.
    /// A duplicate ISBN is rejected as a conflict and leaves the catalog unchanged.
    pub async fn add_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let created = self.repository.books.create(&book).await?;
        tracing::info!("Catalog: registered book id={} '{}'", created.id, created.title);
        Ok(created)
    }

    /// Search the catalog by title, author or ISBN substring.
    /// An empty query lists every book.
    pub async fn search_books(&self, query: &str) -> AppResult<Vec<BookSummary>> {
        let books = self.repository.books.search(query).await?;
        Ok(books.into_iter().map(BookSummary::from).collect())
    }

    /// Get a single book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }
}
