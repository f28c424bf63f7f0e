//! Structured logging and security-focused trace utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing utilities to prevent
//! API keys from leaking into logs.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::Result;
use lazy_static::lazy_static;
use regex::Regex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

lazy_static! {
    // OpenAI secret keys: sk-..., sk-proj-..., sk-svcacct-...
    static ref API_KEY_PATTERN: Regex = Regex::new(r"sk-[A-Za-z0-9_\-]{8,}").unwrap();
    static ref BEARER_PATTERN: Regex = Regex::new(r"(?i)bearer\s+[^\s'\x22]+").unwrap();
}

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    // Logs go to stderr so one-shot CLI output on stdout stays clean
    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

/// Sanitizes sensitive information from log messages.
///
/// Replaces OpenAI API keys and any `Bearer <token>` value with a
/// `[REDACTED]` placeholder. Upstream error bodies sometimes echo a
/// truncated key back, so they pass through here before being logged.
pub fn sanitize(input: &str) -> String {
    let result = BEARER_PATTERN.replace_all(input, "Bearer [REDACTED]");
    API_KEY_PATTERN
        .replace_all(&result, "[REDACTED_API_KEY]")
        .into_owned()
}
