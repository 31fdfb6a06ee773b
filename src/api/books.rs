//! Book (catalog) endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, BookSummary, CreateBook},
};

/// Catalog search query
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuery {
    /// Substring matched against title, author or ISBN; empty lists all books
    pub q: Option<String>,
}

/// Search the catalog
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("q" = Option<String>, Query, description = "Search in title, author or ISBN")
    ),
    responses(
        (status = 200, description = "Matching books", body = Vec<BookSummary>)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<BookSummary>>> {
    let q = query.q.unwrap_or_default();
    let books = state.services.catalog.search_books(&q).await?;
    Ok(Json(books))
}

/// Register a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book registered", body = Book),
        (status = 400, description = "Missing title or location"),
        (status = 409, description = "ISBN already registered")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.catalog.add_book(request).await?;
    Ok((StatusCode::CREATED, Json(book)))
}
