//! # Bookshelf HTTP Server Module
//!
//! Axum server exposing the book catalogue.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/books` - List and create books
//! - `/api/books/:id` - Get, update and delete a book

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use book_routes::{book_routes, BookState};
pub use config::{ConfigError, HttpServerConfig};
pub use errors::{BookError, BookResult};
pub use server::HttpServer;
