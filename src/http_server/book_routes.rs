//! Book HTTP Routes
//!
//! CRUD endpoints over the in-memory book store, mounted under `/api`.
//!
//! In compatible mode (the default) every handler answers 200: a lookup miss
//! yields an empty book and an undecodable body is treated as an empty book.
//! Strict mode reports those cases as [`BookError`].

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::debug;

use crate::books::{first_value, Book, BookStore};

use super::errors::{BookError, BookResult};

// ==================
// Shared State
// ==================

/// Book state shared across handlers
pub struct BookState {
    pub store: BookStore,
    pub strict: bool,
}

impl BookState {
    pub fn new(store: BookStore) -> Self {
        Self {
            store,
            strict: false,
        }
    }

    pub fn strict(store: BookStore) -> Self {
        Self {
            store,
            strict: true,
        }
    }
}

impl Default for BookState {
    fn default() -> Self {
        Self::new(BookStore::new())
    }
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler))
        .route("/books", post(create_book_handler))
        .route("/books/:id", get(get_book_handler))
        .route("/books/:id", put(update_book_handler))
        .route("/books/:id", delete(delete_book_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Decode the first JSON value of a request body as a book.
///
/// Fields decode leniently (see [`Book`]). Unreadable JSON becomes an empty
/// book in compatible mode; strict mode rejects it, and also rejects a value
/// that is not an object.
fn decode_book(state: &BookState, body: &Bytes) -> BookResult<Book> {
    match first_value(body) {
        Ok(value) if state.strict && !value.is_object() => Err(BookError::InvalidBody(
            "expected a JSON object".to_string(),
        )),
        Ok(value) => Ok(Book::from(value)),
        Err(e) if state.strict => Err(BookError::InvalidBody(e.to_string())),
        Err(e) => {
            debug!(error = %e, "request body not decoded, using empty book");
            Ok(Book::default())
        }
    }
}

// ==================
// Handlers
// ==================

async fn list_books_handler(State(state): State<Arc<BookState>>) -> Json<Vec<Book>> {
    Json(state.store.list().await)
}

async fn get_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> BookResult<Json<Book>> {
    match state.store.find_by_id(&id).await {
        Some(book) => Ok(Json(book)),
        None if state.strict => Err(BookError::NotFound(id)),
        None => {
            debug!(%id, "book not found, returning empty book");
            Ok(Json(Book::default()))
        }
    }
}

async fn create_book_handler(
    State(state): State<Arc<BookState>>,
    body: Bytes,
) -> BookResult<Response> {
    let book = decode_book(&state, &body)?.with_generated_id();
    state.store.append(book.clone()).await;
    debug!(id = %book.id, "book created");

    let status = if state.strict {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(book)).into_response())
}

/// The path id is ignored; the id in the body selects the record.
async fn update_book_handler(
    State(state): State<Arc<BookState>>,
    Path(_id): Path<String>,
    body: Bytes,
) -> BookResult<Json<Book>> {
    let book = decode_book(&state, &body)?;
    let replaced = state.store.replace_by_id(&book.id, book.clone()).await;

    if !replaced {
        if state.strict {
            return Err(BookError::NotFound(book.id));
        }
        debug!(id = %book.id, "no book to replace, update discarded");
    }
    Ok(Json(book))
}

async fn delete_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> BookResult<Json<Vec<Book>>> {
    let (removed, remaining) = state.store.delete_and_list(&id).await;

    if !removed {
        if state.strict {
            return Err(BookError::NotFound(id));
        }
        debug!(%id, "no book to delete");
    }
    Ok(Json(remaining))
}
