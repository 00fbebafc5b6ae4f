//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf serve [--config <path>] [--host <host>] [--port <port>] [--fixture <path>] [--strict]
//! - bookshelf check-fixture [--fixture <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bookshelf - an in-memory book catalogue over HTTP
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the fixture and serve the book API
    Serve {
        /// Path to an optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Fixture file to seed the store from
        #[arg(long)]
        fixture: Option<PathBuf>,

        /// Answer misses and bad bodies with 4xx instead of 200
        #[arg(long)]
        strict: bool,
    },

    /// Parse a fixture file and report how many books it holds
    CheckFixture {
        /// Fixture file to check
        #[arg(long, default_value = "./fixtures/books.json")]
        fixture: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "bookshelf", "serve", "--port", "9000", "--fixture", "seed.json", "--strict",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                config,
                host,
                port,
                fixture,
                strict,
            } => {
                assert!(config.is_none());
                assert!(host.is_none());
                assert_eq!(port, Some(9000));
                assert_eq!(fixture, Some(PathBuf::from("seed.json")));
                assert!(strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_fixture_default_path() {
        let cli = Cli::try_parse_from(["bookshelf", "check-fixture"]).unwrap();
        match cli.command {
            Command::CheckFixture { fixture } => {
                assert_eq!(fixture, PathBuf::from("./fixtures/books.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["bookshelf", "serve", "--port", "70000"]).is_err());
    }
}
