//! # Books
//!
//! Data model, in-memory store and fixture loading for the book catalogue.
//!
//! ```ignore
//! use bookshelf::books::{seed_store, BookStore};
//!
//! let store = BookStore::new();
//! seed_store(&store, Path::new("./fixtures/books.json")).await;
//! ```

pub mod fixture;
pub mod model;
pub mod store;

pub use fixture::{load_fixture, seed_store, FixtureError};
pub use model::{first_value, Author, Book};
pub use store::BookStore;
