//! Data models for Estante

pub mod book;
pub mod loan;
pub mod student;

// Re-export commonly used types
pub use book::{Book, BookSummary, CreateBook};
pub use loan::{ActiveLoan, CreateLoan, Loan};
pub use student::{CreateStudent, Student};
