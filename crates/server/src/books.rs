use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::book::Book;
use tracing::info;

use crate::{errors::ApiError, state::ServerState};

/// Get all books
///
/// Returns every stored book in repository order.
#[utoipa::path(
    get, path = "/api/books", tag = "Book API",
    responses(
        (status = 200, description = "Returns a list of all books", body = [crate::openapi::BookDoc])
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.books.list().await?;
    info!(count = books.len(), "list books");
    Ok(Json(books))
}

/// Get book by ID
///
/// Returns the book with the given id, or 404 with an empty body.
#[utoipa::path(
    get, path = "/api/books/{id}", tag = "Book API",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Successfully retrieved book", body = crate::openapi::BookDoc),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Book>, ApiError> {
    state.books.get(id).await?.map(Json).ok_or(ApiError::NotFound)
}

/// Create a new book
///
/// Persists the payload and returns it with the assigned id.
#[utoipa::path(
    post, path = "/api/books", tag = "Book API",
    request_body(content = crate::openapi::BookInputDoc, description = "Book object to be created"),
    responses(
        (status = 201, description = "Book created successfully", body = crate::openapi::BookDoc)
    )
)]
pub async fn create(State(state): State<ServerState>, Json(book): Json<Book>) -> Result<(StatusCode, Json<Book>), ApiError> {
    let saved = state.books.create(book).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Update an existing book
///
/// Overwrites title, author and isbn; omitted fields become empty.
#[utoipa::path(
    put, path = "/api/books/{id}", tag = "Book API",
    params(("id" = i64, Path, description = "Book ID")),
    request_body(content = crate::openapi::BookInputDoc, description = "Updated book object"),
    responses(
        (status = 200, description = "Book updated successfully", body = crate::openapi::BookDoc),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(details): Json<Book>,
) -> Result<Json<Book>, ApiError> {
    state.books.update(id, details).await?.map(Json).ok_or(ApiError::NotFound)
}

/// Delete a book
#[utoipa::path(
    delete, path = "/api/books/{id}", tag = "Book API",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted successfully"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    if state.books.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
