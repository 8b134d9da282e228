use std::sync::Arc;

use service::book::{BookRepository, BookService};

#[derive(Clone)]
pub struct ServerState {
    pub books: BookService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { books: BookService::new(repo) }
    }
}
