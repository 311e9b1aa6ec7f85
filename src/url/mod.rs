//! URL classification and resolution
//!
//! Discovered hrefs are either "internal" (crawlable, resolved against the
//! configured domain root) or external/protocol-prefixed (skipped). The
//! classification is a pure prefix check: anything that does not name a
//! scheme or a protocol-relative host is treated as a path on the site
//! under verification.

const PREFIX_HTTP: &str = "http";
const PREFIX_HTTPS: &str = "https";
const PREFIX_NO_PROTOCOL: &str = "//";
const PREFIX_MAILTO: &str = "mailto:";
const PREFIX_SKYPE: &str = "skype:";
const PREFIX_TEL: &str = "tel:";

/// Returns true if the href points inside the site under verification.
///
/// An href is external (not crawlable) when it starts with `http`,
/// `https`, `//`, `mailto:`, `skype:`, or `tel:`. Everything else,
/// including relative and root-relative paths, is internal.
pub fn is_internal(href: &str) -> bool {
    !href.starts_with(PREFIX_HTTP)
        && !href.starts_with(PREFIX_HTTPS)
        && !href.starts_with(PREFIX_NO_PROTOCOL)
        && !href.starts_with(PREFIX_MAILTO)
        && !href.starts_with(PREFIX_SKYPE)
        && !href.starts_with(PREFIX_TEL)
}

/// Resolves a relative href against the domain root.
///
/// Resolution is plain prefixing: the registry stores hrefs exactly as
/// discovered and the dispatch decision operates on this resolved form.
pub fn resolve(domain_root: &str, href: &str) -> String {
    format!("{}{}", domain_root, href)
}

/// Builds the domain root (`protocol://domain`) used to resolve relative
/// check URLs and harvested links.
pub fn domain_root(protocol: &str, domain: &str) -> String {
    format!("{}://{}", protocol, domain)
}
