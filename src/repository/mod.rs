//! Repository layer for book persistence

pub mod books;
pub mod memory;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::Book};

pub use memory::InMemoryBookStore;

/// Storage of owned books.
///
/// `save` is an upsert: saving an id that already exists replaces its fields and keeps
/// its position in `list`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All stored books in insertion order
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Insert or replace a book, returning the stored value
    async fn save(&self, book: &Book) -> AppResult<Book>;

    /// Check the store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Postgres-backed store
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}
