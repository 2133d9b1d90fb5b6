//! In-memory book store, used when no database is configured and in tests

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookStore;
use crate::{error::AppResult, models::Book};

#[derive(Default)]
pub struct InMemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `books`, in order
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }

    async fn save(&self, book: &Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => *existing = book.clone(),
            None => books.push(book.clone()),
        }
        Ok(book.clone())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
