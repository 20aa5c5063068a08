//! Diagnostic logging setup for the binary

use crate::error::{HeadTagsError, Result};
use std::io::IsTerminal;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "HEADTAGS_LOG";

/// Install a global subscriber that writes to stderr
///
/// `HEADTAGS_LOG` takes precedence; otherwise `verbose` selects
/// `debug` over the default `warn`.
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .compact()
        .try_init()
        .map_err(|e| HeadTagsError::Logging(format!("failed to install tracing subscriber: {}", e)))
}
