//! Book queries on Repository

use async_trait::async_trait;

use super::{BookStore, Repository};
use crate::{error::AppResult, models::Book};

impl Repository {
    /// List all books, oldest first
    pub async fn books_list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, page_count FROM books ORDER BY crea_date, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a book, replacing the stored fields if the id already exists
    pub async fn books_upsert(&self, book: &Book) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, title, author, page_count)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
                SET title = EXCLUDED.title,
                    author = EXCLUDED.author,
                    page_count = EXCLUDED.page_count
            RETURNING id, title, author, page_count
            "#,
        )
        .bind(&book.id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.page_count)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

#[async_trait]
impl BookStore for Repository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        self.books_list().await
    }

    async fn save(&self, book: &Book) -> AppResult<Book> {
        self.books_upsert(book).await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
