//! Link registry
//!
//! Concurrent-safe registry of every internal link discovered during a
//! run: which hrefs were seen, which pages referenced them, which URLs
//! were seed checks, and which URLs have already been dispatched as HTTP
//! checks. All state lives behind a single mutex and is reachable only
//! through atomic entry points; callers never iterate and mutate at the
//! same time.
//!
//! Invariant: a URL is dispatched at most once per run, no matter how
//! many pages reference it or how many tasks discover it concurrently.
//! [`LinkRegistry::mark_dispatched_if_new`] is the check-and-set that
//! carries that guarantee.

use crate::url::{is_internal, resolve};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Registry of discovered links, seed URLs, and dispatch decisions.
///
/// Hrefs are stored exactly as discovered (relative form); the dispatch
/// decision operates on the resolved absolute form, so two different
/// hrefs resolving to the same absolute URL still dispatch once.
pub struct LinkRegistry {
    domain_root: String,
    inner: Mutex<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    /// href -> referrer page URLs (diagnostics only)
    links: HashMap<String, HashSet<String>>,

    /// Resolved absolute URLs already dispatched as checks
    dispatched: HashSet<String>,

    /// Resolved absolute URLs of seed checks
    sources: HashSet<String>,
}

impl LinkRegistry {
    pub fn new(domain_root: impl Into<String>) -> Self {
        Self {
            domain_root: domain_root.into(),
            inner: Mutex::new(RegistryInner::default()),
        }
    }

    /// Records a discovered href and the page that referenced it.
    ///
    /// External hrefs are ignored. Idempotent: repeated discoveries of
    /// the same href collapse into one entry; the referrer set only
    /// feeds diagnostics and never affects dispatch.
    pub fn record(&self, href: &str, referrer_url: &str) {
        if !is_internal(href) {
            return;
        }

        let mut inner = self.inner.lock().unwrap();
        inner
            .links
            .entry(href.to_string())
            .or_default()
            .insert(referrer_url.to_string());
    }

    /// Records a seed check's resolved URL in the source-checked set.
    pub fn record_source(&self, url: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.sources.insert(url.to_string());
    }

    /// Returns true if the URL was itself a seed check.
    pub fn is_source(&self, url: &str) -> bool {
        self.inner.lock().unwrap().sources.contains(url)
    }

    /// Atomically marks a URL as dispatched.
    ///
    /// Returns true exactly once per URL for the lifetime of the run;
    /// the caller that receives true must schedule exactly one check.
    /// Every other caller, in any interleaving, receives false and must
    /// not schedule a duplicate.
    pub fn mark_dispatched_if_new(&self, full_url: &str) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.dispatched.insert(full_url.to_string())
    }

    /// Resolves a stored href to the absolute form dispatch operates on.
    pub fn resolve(&self, href: &str) -> String {
        resolve(&self.domain_root, href)
    }

    /// Snapshot of registered-but-undispatched entries, as
    /// `(href, referrers)` pairs. Used by the sweep phase after the
    /// dispatch barrier, when the registry contents are frozen.
    pub fn undispatched(&self) -> Vec<(String, Vec<String>)> {
        let inner = self.inner.lock().unwrap();
        inner
            .links
            .iter()
            .filter(|(href, _)| {
                !inner
                    .dispatched
                    .contains(&resolve(&self.domain_root, href))
            })
            .map(|(href, referrers)| {
                let mut referrers: Vec<String> = referrers.iter().cloned().collect();
                referrers.sort();
                (href.clone(), referrers)
            })
            .collect()
    }

    /// Number of distinct internal hrefs discovered so far.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
