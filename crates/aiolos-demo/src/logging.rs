//! Subscriber setup for the demo binary.
//!
//! Filtering follows `RUST_LOG` (for example `RUST_LOG=aiolos_panel=debug`
//! shows every transition span); without it only warnings are printed.
//! Logs go to stderr so the geometry report on stdout stays clean.

use tracing_subscriber::EnvFilter;

use crate::error::{DemoError, Result};

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, as JSON lines when `json` is set.
pub fn init(json: bool) -> Result<()> {
    let installed = if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init()
    };
    installed.map_err(|err| DemoError::Logging {
        message: err.to_string(),
    })
}
