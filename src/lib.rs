//! bookshelf - An in-memory book catalogue served over a JSON HTTP API

pub mod books;
pub mod cli;
pub mod http_server;
pub mod observability;
