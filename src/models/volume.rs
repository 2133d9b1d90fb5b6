//! Google Books volume models
//!
//! These mirror the provider's wire shape and are passed back to clients as-is by the
//! search endpoint. Every field is optional because the provider omits empty ones
//! (`items` is missing entirely when a search has no hits).

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Result of a `volumes` search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSearch {
    /// Resource kind, `books#volumes`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Volume>>,
}

impl VolumeSearch {
    /// First item whose id equals `id` exactly
    pub fn find(&self, id: &str) -> Option<&Volume> {
        self.items.as_deref()?.iter().find(|item| item.id == id)
    }
}

/// A single provider volume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_info: Option<VolumeInfo>,
}

/// Descriptive metadata of a volume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i32>,
}

/// Query parameters of the provider search endpoint
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct VolumeSearchQuery {
    /// Free-text query
    pub q: String,
    pub max_results: Option<i32>,
    pub start_index: Option<i32>,
}
