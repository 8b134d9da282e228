//! Book module: domain, repository and service layers.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::Book;
pub use repository::BookRepository;
pub use service::BookService;
