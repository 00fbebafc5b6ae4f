//! CLI command implementations

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::info;

use crate::books::load_fixture;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Command-line overrides applied on top of the config file
#[derive(Debug, Default, Clone)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub fixture: Option<PathBuf>,
    pub strict: bool,
}

/// Resolve the server config: defaults, then the config file, then flags
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: ServeOverrides,
) -> CliResult<HttpServerConfig> {
    let mut config = match config_path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = overrides.host {
        config.host = host;
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(fixture) = overrides.fixture {
        config.fixture_path = fixture;
    }
    if overrides.strict {
        config.strict_status = true;
    }

    Ok(config)
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    observability::init_tracing();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            fixture,
            strict,
        } => {
            let overrides = ServeOverrides {
                host,
                port,
                fixture,
                strict,
            };
            serve(resolve_config(config.as_deref(), overrides)?)
        }
        Command::CheckFixture { fixture } => check_fixture(&fixture),
    }
}

/// Seed the store from the fixture and serve until interrupted
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        info!(addr = %config.socket_addr(), fixture = %config.fixture_path.display(), "starting");
        let server = HttpServer::bootstrap(config).await;
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Decode a fixture file and print its book count
pub fn check_fixture(path: &Path) -> CliResult<()> {
    let books = load_fixture(path)?;
    write_response(json!({
        "path": path.display().to_string(),
        "books": books.len(),
    }))
}
