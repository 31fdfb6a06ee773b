//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, isbn, location, available FROM books WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Create a new book. New books start out available.
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, isbn, location)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, title, author, isbn, location, available
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(&book.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::Conflict(
                        "A book with this ISBN is already registered".to_string(),
                    );
                }
            }
            AppError::from(e)
        })
    }

    /// Search books by title, author or ISBN substring.
    /// An empty query returns the whole catalog.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Book>> {
        let books = if query.is_empty() {
            sqlx::query_as::<_, Book>(
                "SELECT id, title, author, isbn, location, available FROM books",
            )
            .fetch_all(&self.pool)
            .await?
        } else {
            let like = format!("%{}%", query);
            sqlx::query_as::<_, Book>(
                r#"
                SELECT id, title, author, isbn, location, available
                FROM books
                WHERE title LIKE ?1 OR author LIKE ?1 OR isbn LIKE ?1
                "#,
            )
            .bind(&like)
            .fetch_all(&self.pool)
            .await?
        };

        Ok(books)
    }
}
