//! Library book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{error::AppResult, models::Book};

/// List all books in the library
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Stored books, oldest first", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Add a Google Books volume to the library
#[utoipa::path(
    post,
    path = "/books/{external_id}",
    tag = "books",
    params(("external_id" = String, Path, description = "Google Books volume ID")),
    responses(
        (status = 201, description = "Book added", body = Book),
        (status = 400, description = "Book could not be added (collapsed error mode)"),
        (status = 404, description = "Volume not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Volume has no title", body = crate::error::ErrorResponse),
        (status = 502, description = "Google Books unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Path(external_id): Path<String>,
) -> Response {
    match state.services.catalog.add_from_external_id(&external_id).await {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) if state.config.api.collapse_add_errors => {
            tracing::warn!("Failed to add book {}: {}", external_id, e);
            StatusCode::BAD_REQUEST.into_response()
        }
        Err(e) => e.into_response(),
    }
}
