//! Loans repository for database operations
//!
//! Loan creation and return each pair a loan-row mutation with the book's
//! availability flag. Both statements run inside one transaction so a
//! partial failure leaves no orphan loan row and no stuck flag.

use chrono::Local;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::loan::{ActiveLoan, CreateLoan, Loan},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Sqlite>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>(
            "SELECT id, book_id, student_id, loan_date, return_date FROM loans WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// Create a new loan and mark the book unavailable
    pub async fn create(&self, loan: &CreateLoan) -> AppResult<Loan> {
        let today = Local::now().date_naive();

        let mut tx = self.pool.begin().await?;

        let available: bool = sqlx::query_scalar("SELECT available FROM books WHERE id = ?1")
            .bind(loan.book_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Book with id {} not found", loan.book_id))
            })?;

        if !available {
            return Err(AppError::BusinessRule(
                "Book is not available for loan".to_string(),
            ));
        }

        let created = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (book_id, student_id, loan_date, return_date)
            VALUES (?1, ?2, ?3, NULL)
            RETURNING id, book_id, student_id, loan_date, return_date
            "#,
        )
        .bind(loan.book_id)
        .bind(loan.student_id)
        .bind(today)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            // The partial unique index on active loans catches a race the
            // availability check above cannot see.
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::BusinessRule("Book already has an active loan".to_string());
                }
            }
            AppError::from(e)
        })?;

        sqlx::query("UPDATE books SET available = FALSE WHERE id = ?1")
            .bind(loan.book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    /// Close a loan: set its return date and mark the book available again.
    ///
    /// The book id is read from the loan row instead of being taken from the
    /// caller, so the pair can never disagree.
    pub async fn close(&self, loan_id: i64) -> AppResult<Loan> {
        let today = Local::now().date_naive();

        let mut tx = self.pool.begin().await?;

        let loan = sqlx::query_as::<_, Loan>(
            "SELECT id, book_id, student_id, loan_date, return_date FROM loans WHERE id = ?1",
        )
        .bind(loan_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", loan_id)))?;

        if loan.return_date.is_some() {
            return Err(AppError::BusinessRule("Loan already returned".to_string()));
        }

        let closed = sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans SET return_date = ?1 WHERE id = ?2
            RETURNING id, book_id, student_id, loan_date, return_date
            "#,
        )
        .bind(today)
        .bind(loan_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE books SET available = TRUE WHERE id = ?1")
            .bind(loan.book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(closed)
    }

    /// List active loans joined with book and student, oldest first
    pub async fn list_active(&self) -> AppResult<Vec<ActiveLoan>> {
        let loans = sqlx::query_as::<_, ActiveLoan>(
            r#"
            SELECT l.id, b.title AS book_title, s.name AS student_name,
                   l.loan_date, l.book_id
            FROM loans l
            JOIN books b ON l.book_id = b.id
            JOIN students s ON l.student_id = s.id
            WHERE l.return_date IS NULL
            ORDER BY l.loan_date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(loans)
    }

    /// Count active loans
    pub async fn count_active(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM loans WHERE return_date IS NULL")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
