//! Google Books search passthrough

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{VolumeSearch, VolumeSearchQuery},
};

/// Search Google Books
///
/// The provider response is returned as-is.
#[utoipa::path(
    get,
    path = "/google",
    tag = "google",
    params(VolumeSearchQuery),
    responses(
        (status = 200, description = "Provider search result", body = VolumeSearch),
        (status = 400, description = "Missing or malformed query"),
        (status = 502, description = "Google Books unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn search(
    State(state): State<crate::AppState>,
    Query(query): Query<VolumeSearchQuery>,
) -> AppResult<Json<VolumeSearch>> {
    let result = state.services.catalog.search(&query).await?;
    Ok(Json(result))
}
