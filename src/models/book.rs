//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A book in the personal library, keyed by its provider identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Google Books volume id
    pub id: String,
    pub title: String,
    /// First listed author
    pub author: Option<String>,
    #[serde(rename = "pageCount")]
    pub page_count: Option<i32>,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.map(str::to_string),
            page_count: None,
        }
    }
}
