//! Service layer for the bookshelf API.
//! - `book`: domain type, repository abstraction and the CRUD service.
//! - `storage`: non-relational repository implementations.

pub mod errors;
pub mod book;
pub mod storage;
#[cfg(test)]
pub mod test_support;
