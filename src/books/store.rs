//! In-memory book store
//!
//! An ordered `Vec<Book>` behind a single lock. Lookups are linear scans in
//! insertion order and always act on the first matching id.
//!
//! Replacing a record moves it to the tail of the list, so the order observed
//! by `list` changes after every successful update.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::model::Book;

/// Shared handle to the process-wide book list
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book to the end of the list
    pub async fn append(&self, book: Book) {
        self.books.write().await.push(book);
    }

    /// Append many books, preserving their order
    pub async fn extend(&self, books: impl IntoIterator<Item = Book>) {
        self.books.write().await.extend(books);
    }

    /// First book with the given id, if any
    pub async fn find_by_id(&self, id: &str) -> Option<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// Remove the first book with `id` and append `book` to the tail.
    ///
    /// Returns `false` and discards `book` when nothing matches.
    pub async fn replace_by_id(&self, id: &str, book: Book) -> bool {
        let mut books = self.books.write().await;
        if remove_first(&mut books, id).is_none() {
            return false;
        }
        books.push(book);
        true
    }

    /// Remove the first book with `id`. Returns whether one was removed.
    pub async fn delete_by_id(&self, id: &str) -> bool {
        let mut books = self.books.write().await;
        remove_first(&mut books, id).is_some()
    }

    /// Delete and return the remaining list under one lock
    pub async fn delete_and_list(&self, id: &str) -> (bool, Vec<Book>) {
        let mut books = self.books.write().await;
        let removed = remove_first(&mut books, id).is_some();
        (removed, books.clone())
    }

    /// Snapshot of all books in current order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

fn remove_first(books: &mut Vec<Book>, id: &str) -> Option<Book> {
    let index = books.iter().position(|existing| existing.id == id)?;
    Some(books.remove(index))
}
