//! Catalog service: listing, provider search and add-by-id

use std::sync::Arc;

use crate::{
    config::{CatalogConfig, LookupStrategy},
    error::{AppError, AppResult},
    mapper::book_from_volume,
    models::{Book, Volume, VolumeSearch, VolumeSearchQuery},
    repository::BookStore,
    services::google_books::CatalogClient,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn BookStore>,
    client: Arc<dyn CatalogClient>,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(
        store: Arc<dyn BookStore>,
        client: Arc<dyn CatalogClient>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            store,
            client,
            config,
        }
    }

    /// All books in the library
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.store.list().await
    }

    /// Check the book store is reachable
    pub async fn ping_store(&self) -> AppResult<()> {
        self.store.ping().await
    }

    /// Forward a search to the provider untouched
    pub async fn search(&self, query: &VolumeSearchQuery) -> AppResult<VolumeSearch> {
        self.client
            .search(&query.q, query.max_results, query.start_index)
            .await
    }

    /// Fetch a provider volume by id and store it as a book.
    ///
    /// Saving an id that is already in the library replaces the stored fields.
    pub async fn add_from_external_id(&self, id: &str) -> AppResult<Book> {
        let volume = self
            .lookup(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        let book = book_from_volume(id, volume.volume_info.as_ref())?;
        let saved = self.store.save(&book).await?;

        tracing::info!("Added book {} ({:?})", saved.id, saved.title);
        Ok(saved)
    }

    async fn lookup(&self, id: &str) -> AppResult<Option<Volume>> {
        match self.config.lookup {
            LookupStrategy::Direct => Ok(self
                .client
                .get_volume(id)
                .await?
                .filter(|volume| volume.id == id)),
            // The provider has to echo the id back within the first page.
            LookupStrategy::Search => {
                let results = self
                    .client
                    .search(id, Some(self.config.lookup_page_size), Some(0))
                    .await?;
                Ok(results.find(id).cloned())
            }
        }
    }
}
