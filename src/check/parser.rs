//! HTML parsing and link harvesting
//!
//! Fetched GET bodies are parsed once per check into a queryable
//! document; the same document serves both structural assertions and
//! outbound-link extraction. Hrefs are harvested exactly as written;
//! classification and resolution happen in the link registry.

use scraper::{Html, Selector};

/// Parses a response body into a queryable document.
///
/// The parse is lenient and never fails; malformed markup produces a
/// best-effort tree. Unreadable bodies are caught earlier, at the probe.
pub fn parse_document(body: &str) -> Html {
    Html::parse_document(body)
}

/// Extracts all non-empty `href` attributes from anchor elements.
pub fn extract_hrefs(document: &Html) -> Vec<String> {
    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hrefs() {
        let html = r#"<html><body>
            <a href="/contact">Contact</a>
            <a href="https://ext.com">External</a>
            <a href="mailto:a@b.com">Mail</a>
        </body></html>"#;
        let document = parse_document(html);
        let hrefs = extract_hrefs(&document);
        assert_eq!(
            hrefs,
            vec!["/contact", "https://ext.com", "mailto:a@b.com"]
        );
    }

    #[test]
    fn test_skip_empty_and_missing_hrefs() {
        let html = r#"<html><body>
            <a href="">Empty</a>
            <a name="anchor">No href</a>
            <a href="/ok">Ok</a>
        </body></html>"#;
        let document = parse_document(html);
        assert_eq!(extract_hrefs(&document), vec!["/ok"]);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        // Dedup is the registry's job, not the parser's
        let html = r#"<a href="/contact">A</a><a href="/contact">B</a>"#;
        let document = parse_document(html);
        assert_eq!(extract_hrefs(&document), vec!["/contact", "/contact"]);
    }

    #[test]
    fn test_malformed_html_still_parses() {
        let document = parse_document("<a href=/one><p><a href=\"/two\"");
        let hrefs = extract_hrefs(&document);
        assert!(hrefs.contains(&"/one".to_string()));
    }
}
