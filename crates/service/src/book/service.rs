use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::Book;
use super::repository::BookRepository;
use crate::errors::ServiceError;

/// CRUD operations over books, delegating storage to the injected repository.
///
/// Each call is a single read or read-then-write against the repository; no
/// locking is applied, so concurrent updates of one id race.
#[derive(Clone)]
pub struct BookService {
    repo: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Book>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Book>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Persist a new book. Any `id` in the payload is handed to the repository as is.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::book::{Book, BookService};
    /// use service::storage::InMemoryBookRepository;
    /// let svc = BookService::new(Arc::new(InMemoryBookRepository::new()));
    /// let book = tokio_test::block_on(svc.create(Book::new("Dune", "Herbert", "9780441013593"))).unwrap();
    /// assert_eq!(book.id, Some(1));
    /// ```
    #[instrument(skip(self, book), fields(title = %book.title))]
    pub async fn create(&self, book: Book) -> Result<Book, ServiceError> {
        let saved = self.repo.save(book).await?;
        info!(id = ?saved.id, "book_created");
        Ok(saved)
    }

    /// Overwrite title, author and isbn of book `id`. `None` when no such book exists.
    #[instrument(skip(self, details))]
    pub async fn update(&self, id: i64, details: Book) -> Result<Option<Book>, ServiceError> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            debug!("book not found");
            return Ok(None);
        };
        existing.overwrite_with(details);
        let saved = self.repo.save(existing).await?;
        info!("book_updated");
        Ok(Some(saved))
    }

    /// Remove book `id`. Returns `false` when no such book exists.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let Some(existing) = self.repo.find_by_id(id).await? else {
            debug!("book not found");
            return Ok(false);
        };
        self.repo.delete(&existing).await?;
        info!("book_deleted");
        Ok(true)
    }
}
