//! Run statistics
//!
//! Aggregates one terminal outcome per check plus crawl counters, and
//! renders the end-of-run summary.

use crate::report::EventKind;

/// Aggregated outcome counters for a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Total checks probed (seeds plus follow-ups)
    pub checks_run: u64,

    /// Checks whose status matched and whose assertions all held
    pub passed: u64,

    /// Checks that answered with an unexpected status code
    pub status_mismatches: u64,

    /// Checks with at least one failed structural assertion
    pub assertion_failures: u64,

    /// Checks that failed at the network or body-read level
    pub system_failures: u64,

    /// Distinct internal links discovered during the dispatch phase
    pub links_discovered: u64,

    /// Follow-up checks issued in the sweep phase
    pub follow_up_checks: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one check's terminal outcome.
    pub fn record(&mut self, kind: EventKind) {
        self.checks_run += 1;
        match kind {
            EventKind::Success => self.passed += 1,
            EventKind::StatusMismatch => self.status_mismatches += 1,
            EventKind::AssertionFailure => self.assertion_failures += 1,
            EventKind::SystemFailure => self.system_failures += 1,
        }
    }

    /// Total failed checks across all failure kinds.
    pub fn failures(&self) -> u64 {
        self.status_mismatches + self.assertion_failures + self.system_failures
    }

    /// Success rate as a percentage of checks run.
    pub fn success_rate(&self) -> f64 {
        if self.checks_run == 0 {
            return 0.0;
        }
        (self.passed as f64 / self.checks_run as f64) * 100.0
    }
}

/// Prints the run summary to stdout.
pub fn print_summary(stats: &RunStats) {
    println!("=== Verification Summary ===\n");

    println!("Checks:");
    println!("  Total run: {}", stats.checks_run);
    println!("  Passed: {}", stats.passed);
    println!("  Status mismatches: {}", stats.status_mismatches);
    println!("  Assertion failures: {}", stats.assertion_failures);
    println!("  System failures: {}", stats.system_failures);
    println!();

    println!("Crawl:");
    println!("  Internal links discovered: {}", stats.links_discovered);
    println!("  Follow-up checks issued: {}", stats.follow_up_checks);
    println!();

    println!(
        "Success Rate: {:.1}% ({} / {} checks passed)",
        stats.success_rate(),
        stats.passed,
        stats.checks_run
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_each_kind_once() {
        let mut stats = RunStats::new();
        stats.record(EventKind::Success);
        stats.record(EventKind::Success);
        stats.record(EventKind::StatusMismatch);
        stats.record(EventKind::AssertionFailure);
        stats.record(EventKind::SystemFailure);

        assert_eq!(stats.checks_run, 5);
        assert_eq!(stats.passed, 2);
        assert_eq!(stats.status_mismatches, 1);
        assert_eq!(stats.assertion_failures, 1);
        assert_eq!(stats.system_failures, 1);
        assert_eq!(stats.failures(), 3);
    }

    #[test]
    fn test_success_rate() {
        let mut stats = RunStats::new();
        for _ in 0..8 {
            stats.record(EventKind::Success);
        }
        for _ in 0..2 {
            stats.record(EventKind::StatusMismatch);
        }
        assert!((stats.success_rate() - 80.0).abs() < 0.01);
    }

    #[test]
    fn test_success_rate_no_checks() {
        assert_eq!(RunStats::new().success_rate(), 0.0);
    }
}
