//! Sitemap XML configs
//!
//! A sitemap config (`<urlset><url><loc>…`) lists absolute URLs that are
//! all expected to answer HTTP 200.

use crate::{ConfigError, ConfigResult};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Extracts the `<loc>` of every `<url>` entry from a sitemap document.
pub fn parse_sitemap(xml: &str) -> ConfigResult<Vec<String>> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    let mut locations = Vec::new();
    let mut buf = Vec::new();

    let mut in_url = false;
    let mut current_tag = String::new();
    let mut current_loc = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if name == "url" {
                    in_url = true;
                    current_loc.clear();
                } else {
                    current_tag = name;
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if name == "url" && in_url {
                    if !current_loc.is_empty() {
                        locations.push(current_loc.clone());
                    }
                    in_url = false;
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().unwrap_or_default().to_string();
                if in_url && current_tag == "loc" {
                    current_loc = text.trim().to_string();
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ConfigError::Xml(e.to_string()));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_urlset() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <url>
            <loc>https://example.com/</loc>
          </url>
          <url>
            <loc>https://example.com/about</loc>
            <lastmod>2024-01-15</lastmod>
          </url>
          <url>
            <loc>https://example.com/blog/post-1</loc>
          </url>
        </urlset>"#;

        let locations = parse_sitemap(xml).unwrap();
        assert_eq!(
            locations,
            vec![
                "https://example.com/",
                "https://example.com/about",
                "https://example.com/blog/post-1"
            ]
        );
    }

    #[test]
    fn test_url_without_loc_is_skipped() {
        let xml = "<urlset><url></url><url><loc>https://example.com/</loc></url></urlset>";
        let locations = parse_sitemap(xml).unwrap();
        assert_eq!(locations, vec!["https://example.com/"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_sitemap("").unwrap().is_empty());
        assert!(parse_sitemap("<urlset></urlset>").unwrap().is_empty());
    }

    /// The parser must never panic on arbitrary input; returning Err or
    /// an empty list is fine.
    #[test]
    fn test_fuzz_inputs_never_panic() {
        let fuzz_inputs = [
            "not xml at all",
            "<",
            "<url>",
            "<url><loc>",
            "<<<>>>",
            "<urlset><url><loc></loc></url></urlset>",
            "\x00\x01\x02\x03",
            "<?xml version=\"1.0\"?><urlset></urlset>",
        ];

        for input in &fuzz_inputs {
            let _ = parse_sitemap(input);
        }
    }
}
