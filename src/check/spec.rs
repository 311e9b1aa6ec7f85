//! Check specifications
//!
//! A [`CheckSpec`] is the immutable description of one HTTP assertion:
//! the absolute target URL, the expected status code, optional structural
//! assertions, and whether outbound links on the page should be
//! harvested. Seed specs come from configuration; derived specs are
//! created at runtime for harvested links.

/// The expected status code for every harvested-link follow-up check.
pub const FOLLOW_UP_STATUS: u16 = 200;

/// An immutable description of one HTTP check.
#[derive(Debug, Clone)]
pub struct CheckSpec {
    /// Absolute target URL
    pub url: String,

    /// Expected HTTP status code
    pub expected_status: u16,

    /// Structural assertions evaluated against the fetched document
    pub assertions: Vec<Assertion>,

    /// Whether outbound links on this page should be harvested
    pub harvest_links: bool,
}

impl CheckSpec {
    /// Creates a derived check for a harvested link.
    ///
    /// Follow-up checks always expect HTTP 200, carry no assertions, and
    /// never harvest: links discovered by sweep-phase pages are not
    /// themselves followed.
    pub fn follow_up(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            expected_status: FOLLOW_UP_STATUS,
            assertions: Vec::new(),
            harvest_links: false,
        }
    }

    /// Returns true if the check needs a response body, i.e. must be
    /// probed with GET instead of HEAD.
    pub fn needs_body(&self) -> bool {
        !self.assertions.is_empty() || self.harvest_links
    }
}

/// A structural assertion: selector, comparator keyword, expected count.
///
/// The comparator is carried as configured text. Unrecognized keywords
/// pass through config loading and surface as per-check failures at
/// evaluation time.
#[derive(Debug, Clone)]
pub struct Assertion {
    /// CSS selector to count elements for
    pub selector: String,

    /// Comparator keyword (`eq`, `gt`, `gte`, `lt`, `lte`, `ne`)
    pub comparator: String,

    /// Expected element count
    pub expected: usize,
}
