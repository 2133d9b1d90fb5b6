//! Business logic services

pub mod catalog;
pub mod google_books;

use std::sync::Arc;

use crate::{config::CatalogConfig, repository::BookStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services over the given store and provider client
    pub fn new(
        store: Arc<dyn BookStore>,
        client: Arc<dyn google_books::CatalogClient>,
        catalog_config: CatalogConfig,
    ) -> Self {
        Self {
            catalog: catalog::CatalogService::new(store, client, catalog_config),
        }
    }
}
