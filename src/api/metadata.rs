//! ISBN metadata lookup endpoint
//!
//! The UI calls this before registering a book to prefill the title and
//! author fields; the result is passed back in the `POST /books` body and
//! never stored by the server itself.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    services::metadata::BookMetadata,
};

/// Look up book metadata by ISBN
#[utoipa::path(
    get,
    path = "/metadata/isbn/{isbn}",
    tag = "metadata",
    params(
        ("isbn" = String, Path, description = "ISBN to look up")
    ),
    responses(
        (status = 200, description = "Metadata found", body = BookMetadata),
        (status = 404, description = "No match for this ISBN"),
        (status = 502, description = "Metadata API unreachable")
    )
)]
pub async fn lookup_isbn(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BookMetadata>> {
    let metadata = state
        .services
        .metadata
        .lookup_by_isbn(&isbn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No metadata found for ISBN {}", isbn)))?;

    Ok(Json(metadata))
}
