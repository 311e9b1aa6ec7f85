use crate::config::sitemap::parse_sitemap;
use crate::config::types::{RunPlan, SiteConfig};
use crate::config::validation::validate;
use crate::{ConfigError, ConfigResult};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigFormat {
    /// JSON site config (protocol, domain, urls with assertions)
    Json,

    /// Sitemap XML; every location is HEAD-checked for HTTP 200
    Sitemap,
}

impl ConfigFormat {
    /// Infers the format from the file extension (`.json` or `.xml`).
    pub fn detect(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("xml") => Ok(Self::Sitemap),
            _ => Err(ConfigError::UnknownFormat(format!(
                "cannot infer format of '{}'; pass --format",
                path.display()
            ))),
        }
    }
}

/// Loads, validates, and normalizes a configuration file.
///
/// When `format` is None it is inferred from the file extension. Any
/// failure here is fatal: nothing is dispatched from a config that did
/// not load cleanly.
pub fn load_config(path: &Path, format: Option<ConfigFormat>) -> ConfigResult<RunPlan> {
    let format = match format {
        Some(format) => format,
        None => ConfigFormat::detect(path)?,
    };

    let content = std::fs::read_to_string(path)?;

    match format {
        ConfigFormat::Json => {
            let config: SiteConfig = serde_json::from_str(&content)?;
            validate(&config)?;
            Ok(config.plan())
        }
        ConfigFormat::Sitemap => {
            let locations = parse_sitemap(&content)?;
            Ok(RunPlan::from_sitemap(locations))
        }
    }
}

/// Computes a SHA-256 hash of the configuration file content.
///
/// Logged at startup so runs can be matched to the exact config that
/// produced them.
pub fn compute_config_hash(path: &Path) -> ConfigResult<String> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the plan and the file hash.
pub fn load_config_with_hash(
    path: &Path,
    format: Option<ConfigFormat>,
) -> ConfigResult<(RunPlan, String)> {
    let plan = load_config(path, format)?;
    let hash = compute_config_hash(path)?;
    Ok((plan, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;
    use tempfile::NamedTempFile;

    fn create_temp_config(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const VALID_JSON: &str = r#"{
        "protocol": "https",
        "domain": "example.com",
        "checkUrls": true,
        "urls": [
            { "url": "/", "statusCode": 200 },
            { "url": "/about", "statusCode": 200,
              "findElements": [ { "def": "h1", "countType": "eq", "count": 1 } ] }
        ]
    }"#;

    #[test]
    fn test_load_valid_json_config() {
        let file = create_temp_config(".json", VALID_JSON);
        let plan = load_config(file.path(), None).unwrap();

        assert_eq!(plan.domain_root, "https://example.com");
        assert_eq!(plan.checks.len(), 2);
        assert!(plan.checks[0].harvest_links);
    }

    #[test]
    fn test_load_sitemap_config() {
        let xml = r#"<urlset>
            <url><loc>https://example.com/</loc></url>
            <url><loc>https://example.com/about</loc></url>
        </urlset>"#;
        let file = create_temp_config(".xml", xml);
        let plan = load_config(file.path(), None).unwrap();

        assert_eq!(plan.checks.len(), 2);
        assert_eq!(plan.checks[0].expected_status, 200);
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let file = create_temp_config(".txt", VALID_JSON);
        assert!(load_config(file.path(), None).is_err());
        assert!(load_config(file.path(), Some(ConfigFormat::Json)).is_ok());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = load_config(Path::new("/nonexistent/conf.json"), None);
        assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        let file = create_temp_config(".json", "this is not valid JSON {{{");
        let result = load_config(file.path(), None);
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_failure_is_fatal() {
        let json = r#"{ "protocol": "gopher", "domain": "example.com", "urls": [] }"#;
        let file = create_temp_config(".json", json);
        let result = load_config(file.path(), None);
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_extension_without_format() {
        let file = create_temp_config(".yaml", "{}");
        let result = load_config(file.path(), None);
        assert!(matches!(result.unwrap_err(), ConfigError::UnknownFormat(_)));
    }

    #[test]
    fn test_config_hash_is_stable_per_content() {
        let file = create_temp_config(".json", VALID_JSON);
        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);

        let other = create_temp_config(".json", "{}");
        assert_ne!(hash1, compute_config_hash(other.path()).unwrap());
    }

    #[test]
    fn test_load_config_with_hash() {
        let file = create_temp_config(".json", VALID_JSON);
        let (plan, hash) = load_config_with_hash(file.path(), None).unwrap();
        assert_eq!(plan.checks.len(), 2);
        assert_eq!(hash.len(), 64);
    }
}
