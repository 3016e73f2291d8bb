//! Tracing setup for native binaries.
//!
//! The browser build logs through `tracing`'s `log` bridge into `wasm-logger` instead.

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

/// Filter from `RUST_LOG`, or `level` when that is unset or unparsable.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        "trace" | "debug" | "info" | "warn" | "error" => EnvFilter::new(level),
        _ => EnvFilter::new("info"),
    })
}

/// Install the global fmt subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to set tracing subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let _ = init_tracing("debug");
        assert!(matches!(init_tracing("info"), Err(AppError::Config(_))));
    }
}
