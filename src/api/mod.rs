//! API handlers for Estante REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod metadata;
pub mod openapi;
pub mod students;
