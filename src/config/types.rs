use crate::check::{Assertion, CheckSpec};
use crate::url::{domain_root, resolve};
use serde::Deserialize;

/// JSON site configuration: one site plus the URLs to verify on it.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// URL scheme for the site ("http" or "https")
    pub protocol: String,

    /// Domain (host, optionally host:port) all relative URLs resolve against
    pub domain: String,

    /// Whether links found on checked pages should themselves be checked
    #[serde(rename = "checkUrls", default)]
    pub check_urls: bool,

    #[serde(default)]
    pub urls: Vec<UrlEntry>,
}

/// One configured URL check.
#[derive(Debug, Clone, Deserialize)]
pub struct UrlEntry {
    /// Site-relative URL; entries with an empty URL are skipped
    pub url: String,

    /// Expected HTTP status code
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// Structural assertions against the fetched page
    #[serde(rename = "findElements", default)]
    pub find_elements: Vec<ElementRule>,

    /// Opts this page out of link harvesting even when `checkUrls` is on
    #[serde(rename = "skipUrlsCheck", default)]
    pub skip_urls_check: bool,
}

/// One structural assertion as configured.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementRule {
    /// CSS selector
    #[serde(rename = "def")]
    pub selector: String,

    /// Comparator keyword; unrecognized keywords fail at evaluation time
    #[serde(rename = "countType")]
    pub count_type: String,

    /// Expected element count
    pub count: usize,
}

/// Normalized output of configuration loading: the domain root used to
/// resolve harvested links plus the seed check list.
#[derive(Debug, Clone)]
pub struct RunPlan {
    /// `protocol://domain`; empty for sitemap plans, which carry
    /// absolute URLs and never harvest
    pub domain_root: String,

    pub checks: Vec<CheckSpec>,
}

impl SiteConfig {
    /// Normalizes the configuration into a run plan.
    ///
    /// Relative URLs are resolved against `protocol://domain`, entries
    /// with an empty URL are dropped, and a page harvests links exactly
    /// when `checkUrls` is set and the entry does not opt out.
    pub fn plan(&self) -> RunPlan {
        let root = domain_root(&self.protocol, &self.domain);

        let checks = self
            .urls
            .iter()
            .filter(|entry| !entry.url.is_empty())
            .map(|entry| CheckSpec {
                url: resolve(&root, &entry.url),
                expected_status: entry.status_code,
                assertions: entry
                    .find_elements
                    .iter()
                    .map(|rule| Assertion {
                        selector: rule.selector.clone(),
                        comparator: rule.count_type.clone(),
                        expected: rule.count,
                    })
                    .collect(),
                harvest_links: self.check_urls && !entry.skip_urls_check,
            })
            .collect();

        RunPlan {
            domain_root: root,
            checks,
        }
    }
}

impl RunPlan {
    /// Builds a plan from sitemap locations: every URL is absolute, gets
    /// a HEAD check expecting HTTP 200, and nothing is harvested.
    pub fn from_sitemap(locations: Vec<String>) -> Self {
        let checks = locations
            .into_iter()
            .filter(|loc| !loc.is_empty())
            .map(|loc| CheckSpec {
                url: loc,
                expected_status: 200,
                assertions: Vec::new(),
                harvest_links: false,
            })
            .collect();

        Self {
            domain_root: String::new(),
            checks,
        }
    }
}
