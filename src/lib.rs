//! Sitecheck: a concurrent site-verification engine
//!
//! This crate checks a declarative set of target URLs for expected HTTP
//! status codes and HTML structural conditions, harvests internal links
//! from checked pages, and verifies every discovered link exactly once.

pub mod check;
pub mod config;
pub mod report;
pub mod url;

use thiserror::Error;

/// Main error type for sitecheck operations
#[derive(Debug, Error)]
pub enum SitecheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// These are the only fatal errors in the crate: a check that fails at
/// runtime becomes a reporter event, while any of these aborts the run
/// before a single request is dispatched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to parse sitemap XML: {0}")]
    Xml(String),

    #[error("Unknown config format: {0}")]
    UnknownFormat(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for sitecheck operations
pub type Result<T> = std::result::Result<T, SitecheckError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use check::{run_checks, Assertion, CheckSpec, Coordinator};
pub use config::{load_config, ConfigFormat, RunPlan};
pub use report::{CheckEvent, CliReporter, EventKind, Reporter, RunStats};
pub use url::is_internal;
