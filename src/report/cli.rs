//! Terminal reporter
//!
//! Renders check events for the command line. Formatting decisions stop
//! here; the verification core only produces structured events.

use crate::report::{CheckEvent, EventKind, Reporter};

const SEPARATOR: &str = "---------------------------";

/// Prints check events to stdout.
///
/// Success events are suppressed unless verbose mode is enabled; every
/// failure is always printed.
pub struct CliReporter {
    verbose: bool,
}

impl CliReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn prefix(kind: EventKind) -> &'static str {
        match kind {
            EventKind::Success => "Success.",
            EventKind::StatusMismatch | EventKind::AssertionFailure => "/!\\ Fail.",
            EventKind::SystemFailure => "/!\\ SYSTEMFAIL.",
        }
    }

    fn should_print(&self, kind: EventKind) -> bool {
        kind.is_failure() || self.verbose
    }
}

impl Reporter for CliReporter {
    fn notify(&self, event: &CheckEvent) {
        if !self.should_print(event.kind) {
            return;
        }

        println!("{}", SEPARATOR);
        println!("{} {}", Self::prefix(event.kind), event.message);
        println!("{}\n", SEPARATOR);
    }
}
