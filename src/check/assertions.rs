//! Structural assertion evaluation
//!
//! Each assertion counts the elements matching a CSS selector in a
//! fetched document and compares the count against an expected value.
//! Evaluation is pure with respect to the document: the same assertion
//! against an unchanged document always yields the same outcome.

use crate::check::Assertion;
use scraper::{Html, Selector};

/// Count comparator for a structural assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Equal,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    NotEqual,
}

impl Comparator {
    /// Parses a comparator keyword. Returns None for unrecognized input;
    /// the caller reports that as an assertion failure rather than
    /// rejecting the configuration.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "eq" => Some(Self::Equal),
            "gt" => Some(Self::Greater),
            "gte" => Some(Self::GreaterOrEqual),
            "lt" => Some(Self::Less),
            "lte" => Some(Self::LessOrEqual),
            "ne" => Some(Self::NotEqual),
            _ => None,
        }
    }

    /// Applies the comparison. Exact, no tolerance.
    pub fn holds(&self, count: usize, expected: usize) -> bool {
        match self {
            Self::Equal => count == expected,
            Self::Greater => count > expected,
            Self::GreaterOrEqual => count >= expected,
            Self::Less => count < expected,
            Self::LessOrEqual => count <= expected,
            Self::NotEqual => count != expected,
        }
    }
}

/// Result of evaluating one assertion against a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionOutcome {
    /// The count comparison held
    Pass {
        selector: String,
        comparator: String,
        expected: usize,
        count: usize,
    },

    /// The count comparison did not hold
    Fail {
        selector: String,
        comparator: String,
        expected: usize,
        count: usize,
    },

    /// The comparator keyword is not recognized
    UnsupportedComparator { comparator: String },

    /// The selector is not valid CSS
    BadSelector { selector: String },
}

impl AssertionOutcome {
    /// Returns true for any non-pass outcome.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Pass { .. })
    }
}

/// Evaluates one assertion against a fetched document.
///
/// Selector and comparator text are trimmed before use. An unrecognized
/// comparator fails independently of the count.
pub fn evaluate(document: &Html, assertion: &Assertion) -> AssertionOutcome {
    let selector_text = assertion.selector.trim();
    let comparator_text = assertion.comparator.trim();

    let Some(comparator) = Comparator::parse(comparator_text) else {
        return AssertionOutcome::UnsupportedComparator {
            comparator: comparator_text.to_string(),
        };
    };

    let Ok(selector) = Selector::parse(selector_text) else {
        return AssertionOutcome::BadSelector {
            selector: selector_text.to_string(),
        };
    };

    let count = document.select(&selector).count();

    if comparator.holds(count, assertion.expected) {
        AssertionOutcome::Pass {
            selector: selector_text.to_string(),
            comparator: comparator_text.to_string(),
            expected: assertion.expected,
            count,
        }
    } else {
        AssertionOutcome::Fail {
            selector: selector_text.to_string(),
            comparator: comparator_text.to_string(),
            expected: assertion.expected,
            count,
        }
    }
}
