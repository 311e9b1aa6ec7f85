//! Configuration module
//!
//! Loads, validates, and normalizes check configurations. Two formats
//! are supported: a JSON site config (protocol, domain, URLs with status
//! expectations and structural assertions) and a sitemap XML whose every
//! location is HEAD-checked for HTTP 200. Both normalize into a
//! [`RunPlan`], the only shape the verification core consumes.

mod parser;
mod sitemap;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash, ConfigFormat};
pub use sitemap::parse_sitemap;
pub use types::{ElementRule, RunPlan, SiteConfig, UrlEntry};
pub use validation::validate;
