use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::book::{Book, BookRepository};
use crate::errors::ServiceError;

/// In-process book store.
///
/// Ids start at 1 and are never reused, matching an auto-increment column.
/// Iteration order is ascending id.
#[derive(Default)]
pub struct InMemoryBookRepository {
    inner: RwLock<State>,
}

#[derive(Default)]
struct State {
    last_id: i64,
    books: BTreeMap<i64, Book>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self { Self::default() }

    pub async fn len(&self) -> usize {
        self.inner.read().await.books.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.books.get(&id).cloned())
    }

    async fn save(&self, mut book: Book) -> Result<Book, ServiceError> {
        let mut state = self.inner.write().await;
        let id = match book.id {
            Some(id) if state.books.contains_key(&id) => id,
            _ => {
                state.last_id += 1;
                state.last_id
            }
        };
        book.id = Some(id);
        state.books.insert(id, book.clone());
        Ok(book)
    }

    async fn delete(&self, book: &Book) -> Result<(), ServiceError> {
        if let Some(id) = book.id {
            self.inner.write().await.books.remove(&id);
        }
        Ok(())
    }
}
