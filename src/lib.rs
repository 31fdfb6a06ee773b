//! Estante School Library Management Server
//!
//! A small Rust server for managing a school library catalog: registering
//! books and students, tracking loan/return cycles, and prefilling book
//! metadata from an ISBN lookup.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
