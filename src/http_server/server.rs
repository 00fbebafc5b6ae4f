//! # HTTP Server
//!
//! Combines the book and health routers into one axum app and serves it.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::books::{seed_store, BookStore};

use super::book_routes::{book_routes, BookState};
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;

/// HTTP Server for the book API
pub struct HttpServer {
    config: HttpServerConfig,
    store: BookStore,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration and an empty store
    pub fn new() -> Self {
        Self::with_store(HttpServerConfig::default(), BookStore::new())
    }

    /// Create a server over an existing store
    pub fn with_store(config: HttpServerConfig, store: BookStore) -> Self {
        let router = Self::build_router(&config, store.clone());
        Self {
            config,
            store,
            router,
        }
    }

    /// Create a server and seed its store from the configured fixture
    pub async fn bootstrap(config: HttpServerConfig) -> Self {
        let store = BookStore::new();
        seed_store(&store, &config.fixture_path).await;
        Self::with_store(config, store)
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: BookStore) -> Router {
        let book_state = if config.strict_status {
            Arc::new(BookState::strict(store.clone()))
        } else {
            Arc::new(BookState::new(store.clone()))
        };

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes(store))
            .nest("/api", book_routes(book_state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get a handle to the backing store
    pub fn store(&self) -> BookStore {
        self.store.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let books = self.store.len().await;
        info!(
            %addr,
            books,
            strict = self.config.strict_status,
            "serving book API"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
