//! Fixture loading
//!
//! A fixture is a JSON file of the form `{"books": [...]}` read once at
//! startup. Failures never abort startup: they are logged and the store is
//! left as it was.
//!
//! Entries decode leniently, one by one: a badly typed field only empties
//! that field, and a non-object entry becomes an empty book. Only unreadable
//! JSON or a document that is not an object rejects the whole file.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info, warn};

use serde_json::Value;

use super::model::{lookup, Book};
use super::store::BookStore;

/// Fixture loading errors
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture JSON in {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fixture {} is not a JSON object", .path.display())]
    Shape { path: PathBuf },
}

/// Read and decode the books in a fixture file, in file order
pub fn load_fixture(path: &Path) -> Result<Vec<Book>, FixtureError> {
    let content = fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value =
        serde_json::from_str(&content).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let Value::Object(fields) = document else {
        return Err(FixtureError::Shape {
            path: path.to_path_buf(),
        });
    };

    let books = match lookup(&fields, "books") {
        Some(Value::Array(entries)) => entries.iter().cloned().map(Book::from).collect(),
        _ => Vec::new(),
    };
    Ok(books)
}

/// Append the fixture's books to `store`.
///
/// Returns the number of books appended; zero on any error.
pub async fn seed_store(store: &BookStore, path: &Path) -> usize {
    match load_fixture(path) {
        Ok(books) => {
            let count = books.len();
            store.extend(books).await;
            info!(path = %path.display(), count, "fixture loaded");
            count
        }
        Err(err @ FixtureError::Read { .. }) => {
            warn!(error = %err, "fixture not loaded");
            0
        }
        Err(err @ (FixtureError::Parse { .. } | FixtureError::Shape { .. })) => {
            error!(error = %err, "fixture not loaded");
            0
        }
    }
}
