use crate::config::types::{SiteConfig, UrlEntry};
use crate::url::domain_root;
use crate::ConfigError;
use url::Url;

/// Validates a JSON site configuration.
///
/// Comparator keywords are deliberately not checked here: an
/// unrecognized keyword must surface as a per-check assertion failure at
/// evaluation time, not reject the whole run.
pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_protocol(&config.protocol)?;
    validate_domain(&config.domain)?;

    // The resolved root must itself be a well-formed URL.
    let root = domain_root(&config.protocol, &config.domain);
    Url::parse(&root).map_err(|e| {
        ConfigError::Validation(format!("domain '{}' does not form a valid URL: {}", root, e))
    })?;

    for entry in &config.urls {
        validate_entry(entry)?;
    }

    Ok(())
}

fn validate_protocol(protocol: &str) -> Result<(), ConfigError> {
    if protocol != "http" && protocol != "https" {
        return Err(ConfigError::Validation(format!(
            "protocol must be 'http' or 'https', got '{}'",
            protocol
        )));
    }
    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), ConfigError> {
    if domain.is_empty() {
        return Err(ConfigError::Validation("domain cannot be empty".to_string()));
    }

    if domain.contains("://") {
        return Err(ConfigError::Validation(format!(
            "domain '{}' must not include a scheme",
            domain
        )));
    }

    if domain.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "domain '{}' must not contain whitespace",
            domain
        )));
    }

    Ok(())
}

/// Validates one URL entry. Entries with an empty URL are dropped during
/// normalization and need no further checks.
fn validate_entry(entry: &UrlEntry) -> Result<(), ConfigError> {
    if entry.url.is_empty() {
        return Ok(());
    }

    if !(100..=599).contains(&entry.status_code) {
        return Err(ConfigError::Validation(format!(
            "status code {} for '{}' is outside 100-599",
            entry.status_code, entry.url
        )));
    }

    for rule in &entry.find_elements {
        if rule.selector.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "empty selector in assertions for '{}'",
                entry.url
            )));
        }
    }

    Ok(())
}
