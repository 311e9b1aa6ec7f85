//! Result reporting
//!
//! The verification core emits structured [`CheckEvent`]s to a
//! [`Reporter`]; how events are rendered is a presentation concern that
//! lives entirely in the reporter implementation. [`RunStats`] aggregates
//! one terminal outcome per check.

mod cli;
mod stats;

pub use cli::CliReporter;
pub use stats::{print_summary, RunStats};

/// Kind of a check event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Status matched (and, for terminal events, all assertions held)
    Success,

    /// Response received but status differed from expectation
    StatusMismatch,

    /// Status matched but a structural assertion failed, its comparator
    /// was unrecognized, or its selector was invalid
    AssertionFailure,

    /// Network-level failure or body-read failure
    SystemFailure,
}

impl EventKind {
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Success)
    }
}

/// A structured check event.
#[derive(Debug, Clone)]
pub struct CheckEvent {
    pub kind: EventKind,
    pub url: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub message: String,
}

impl CheckEvent {
    /// Status code confirmed.
    pub fn status_confirmed(url: &str, expected: u16) -> Self {
        Self {
            kind: EventKind::Success,
            url: url.to_string(),
            expected: Some(expected.to_string()),
            actual: Some(expected.to_string()),
            message: format!(
                "Requesting {}, expected status code {} confirmed",
                url, expected
            ),
        }
    }

    /// Response received, wrong status code.
    pub fn status_mismatch(url: &str, expected: u16, actual: u16) -> Self {
        Self {
            kind: EventKind::StatusMismatch,
            url: url.to_string(),
            expected: Some(expected.to_string()),
            actual: Some(actual.to_string()),
            message: format!(
                "Requesting {}, expected status code {}, got {}",
                url, expected, actual
            ),
        }
    }

    /// The request never produced a response.
    pub fn request_failed(url: &str) -> Self {
        Self {
            kind: EventKind::SystemFailure,
            url: url.to_string(),
            expected: None,
            actual: None,
            message: format!("Error performing http-request to {}", url),
        }
    }

    /// The response body could not be read.
    pub fn body_read_failed(url: &str) -> Self {
        Self {
            kind: EventKind::SystemFailure,
            url: url.to_string(),
            expected: None,
            actual: None,
            message: format!("Error reading http-request body from {}", url),
        }
    }

    /// A structural assertion held (verbose runs only).
    pub fn assertion_confirmed(
        url: &str,
        selector: &str,
        comparator: &str,
        expected: usize,
    ) -> Self {
        Self {
            kind: EventKind::Success,
            url: url.to_string(),
            expected: Some(format!("{} {} {}", selector, comparator, expected)),
            actual: None,
            message: format!(
                "Selector: '{}'. Expected size '{} {}' confirmed",
                selector, comparator, expected
            ),
        }
    }

    /// A structural assertion's count comparison did not hold.
    pub fn assertion_failed(
        url: &str,
        selector: &str,
        comparator: &str,
        expected: usize,
        count: usize,
    ) -> Self {
        Self {
            kind: EventKind::AssertionFailure,
            url: url.to_string(),
            expected: Some(format!("{} {} {}", selector, comparator, expected)),
            actual: Some(count.to_string()),
            message: format!(
                "Selector: '{}'. Expected size '{} {}', received size {}",
                selector, comparator, expected, count
            ),
        }
    }

    /// An assertion carried an unrecognized comparator keyword.
    pub fn unsupported_comparator(url: &str, comparator: &str) -> Self {
        Self {
            kind: EventKind::AssertionFailure,
            url: url.to_string(),
            expected: None,
            actual: Some(comparator.to_string()),
            message: format!("Not supported count comparator '{}'", comparator),
        }
    }

    /// An assertion carried a selector that is not valid CSS.
    pub fn bad_selector(url: &str, selector: &str) -> Self {
        Self {
            kind: EventKind::AssertionFailure,
            url: url.to_string(),
            expected: None,
            actual: Some(selector.to_string()),
            message: format!("Invalid selector '{}'", selector),
        }
    }
}

/// Receiver of check events.
///
/// Implementations must be thread-safe: events arrive from concurrent
/// checking tasks in no particular order.
pub trait Reporter: Send + Sync {
    fn notify(&self, event: &CheckEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mismatch_carries_both_codes() {
        let event = CheckEvent::status_mismatch("https://example.com/", 200, 404);
        assert_eq!(event.kind, EventKind::StatusMismatch);
        assert_eq!(event.expected.as_deref(), Some("200"));
        assert_eq!(event.actual.as_deref(), Some("404"));
    }

    #[test]
    fn test_system_failures_have_no_expectation() {
        let event = CheckEvent::request_failed("https://example.com/");
        assert_eq!(event.kind, EventKind::SystemFailure);
        assert!(event.expected.is_none());
        assert!(event.actual.is_none());
    }

    #[test]
    fn test_assertion_failure_describes_comparison() {
        let event = CheckEvent::assertion_failed("https://example.com/", "li", "eq", 3, 5);
        assert_eq!(event.kind, EventKind::AssertionFailure);
        assert_eq!(event.expected.as_deref(), Some("li eq 3"));
        assert_eq!(event.actual.as_deref(), Some("5"));
    }

    #[test]
    fn test_only_success_is_not_failure() {
        assert!(!EventKind::Success.is_failure());
        assert!(EventKind::StatusMismatch.is_failure());
        assert!(EventKind::AssertionFailure.is_failure());
        assert!(EventKind::SystemFailure.is_failure());
    }
}
