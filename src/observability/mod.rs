//! Observability for Bookshelf
//!
//! Structured logging through `tracing`. The subscriber is installed once by
//! the binary; library code only emits events.
//!
//! Set `RUST_LOG` to control verbosity, e.g. `RUST_LOG=bookshelf=debug`.
//! Without it, [`DEFAULT_FILTER`] applies.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "bookshelf=info,tower_http=info";

/// Build the env filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber, logging to stderr.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        init_tracing();
        assert!(!init_tracing());
    }

    #[test]
    fn test_default_filter_parses() {
        let filter = EnvFilter::new(DEFAULT_FILTER);
        assert!(filter.to_string().contains("bookshelf=info"));
    }
}
