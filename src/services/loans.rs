//! Loan management service

use crate::{
    error::AppResult,
    models::loan::{ActiveLoan, CreateLoan, Loan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new loan (lend a book to a student)
    pub async fn create_loan(&self, loan: CreateLoan) -> AppResult<Loan> {
        // Verify student exists; the book is checked inside the transaction
        self.repository.students.get_by_id(loan.student_id).await?;

        let created = self.repository.loans.create(&loan).await?;
        tracing::info!(
            "Loan {} created: book {} -> student {}",
            created.id,
            created.book_id,
            created.student_id
        );
        Ok(created)
    }

    /// Close a loan (a student returns a book)
    pub async fn close_loan(&self, loan_id: i64) -> AppResult<Loan> {
        let closed = self.repository.loans.close(loan_id).await?;
        tracing::info!("Loan {} closed: book {} returned", closed.id, closed.book_id);
        Ok(closed)
    }

    /// List active loans, oldest first
    pub async fn list_active_loans(&self) -> AppResult<Vec<ActiveLoan>> {
        self.repository.loans.list_active().await
    }

    /// Count active loans
    pub async fn count_active(&self) -> AppResult<i64> {
        self.repository.loans.count_active().await
    }
}
