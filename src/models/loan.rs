//! Loan model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan model from database
///
/// A loan is active while `return_date` is null; closing the loan sets the
/// date exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i64,
    pub book_id: i64,
    pub student_id: i64,
    pub loan_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

/// Active loan joined with book and student for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ActiveLoan {
    pub id: i64,
    pub book_title: String,
    pub student_name: String,
    pub loan_date: NaiveDate,
    pub book_id: i64,
}

/// Create loan request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLoan {
    pub book_id: i64,
    pub student_id: i64,
}
