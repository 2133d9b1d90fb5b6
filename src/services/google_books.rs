//! Google Books client
//!
//! Talks to the public `volumes` API. Failures are reported once as
//! [`AppError::Upstream`]; there is no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};

use crate::{
    config::GoogleBooksConfig,
    error::{AppError, AppResult},
    models::{Volume, VolumeSearch},
};

/// Remote book catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Free-text volume search
    async fn search(
        &self,
        query: &str,
        max_results: Option<i32>,
        start_index: Option<i32>,
    ) -> AppResult<VolumeSearch>;

    /// Fetch one volume by id, `None` when the provider does not know it
    async fn get_volume(&self, id: &str) -> AppResult<Option<Volume>>;
}

#[derive(Clone)]
pub struct GoogleBooksClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl GoogleBooksClient {
    pub fn new(config: &GoogleBooksConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("bookshelf-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::Internal(format!("Invalid Google Books base URL {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Internal(format!(
                "Invalid Google Books base URL {}",
                config.base_url
            )));
        }

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
        })
    }

    /// Base URL with `segments` appended as escaped path segments
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn get(&self, url: Url) -> RequestBuilder {
        let request = self.http.get(url);
        match &self.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }
}

#[async_trait]
impl CatalogClient for GoogleBooksClient {
    async fn search(
        &self,
        query: &str,
        max_results: Option<i32>,
        start_index: Option<i32>,
    ) -> AppResult<VolumeSearch> {
        let mut params = vec![("q", query.to_string())];
        if let Some(n) = max_results {
            params.push(("maxResults", n.to_string()));
        }
        if let Some(n) = start_index {
            params.push(("startIndex", n.to_string()));
        }

        let url = self.endpoint(&["volumes"]);
        tracing::debug!("Google Books search: {} q={:?}", url, query);

        let search = self
            .get(url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<VolumeSearch>()
            .await?;

        tracing::debug!(
            "Google Books search returned {} items",
            search.items.as_ref().map_or(0, Vec::len)
        );
        Ok(search)
    }

    async fn get_volume(&self, id: &str) -> AppResult<Option<Volume>> {
        let url = self.endpoint(&["volumes", id]);
        tracing::debug!("Google Books lookup: {}", url);

        let response = self.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let volume = response.error_for_status()?.json::<Volume>().await?;
        Ok(Some(volume))
    }
}
