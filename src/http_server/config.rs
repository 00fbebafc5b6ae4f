//! HTTP Server Configuration
//!
//! Configuration for the book API server: bind address, fixture path,
//! status-code mode and CORS settings. Every field has a default, so an empty
//! JSON object is a valid config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 7007)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Fixture file loaded at startup (default: "./fixtures/books.json")
    #[serde(default = "default_fixture_path")]
    pub fixture_path: PathBuf,

    /// Return 4xx statuses for misses and undecodable bodies (default: false)
    #[serde(default)]
    pub strict_status: bool,

    /// CORS allowed origins; empty means any origin (default: [])
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7007
}

fn default_fixture_path() -> PathBuf {
    PathBuf::from("./fixtures/books.json")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            fixture_path: default_fixture_path(),
            strict_status: false,
            cors_origins: Vec::new(),
        }
    }
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {}", .0.display(), .1)]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Invalid config JSON in {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] serde_json::Error),
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
