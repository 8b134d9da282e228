use async_trait::async_trait;

use super::domain::Book;
use crate::errors::ServiceError;

/// Persistence capabilities the book service relies on.
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Book>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, ServiceError>;
    /// Assigns an id when `book.id` is absent or names no stored record;
    /// otherwise overwrites the stored record.
    async fn save(&self, book: Book) -> Result<Book, ServiceError>;
    /// Removes the record with `book.id`; a book without id is ignored.
    async fn delete(&self, book: &Book) -> Result<(), ServiceError>;
}
