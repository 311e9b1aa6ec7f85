//! Verification core
//!
//! This module contains the crawl/dedup/concurrency logic:
//! - Check specifications and their derived follow-ups
//! - HTTP probing (HEAD/GET selection, failure classification)
//! - Structural assertion evaluation
//! - Link harvesting and the deduplicating link registry
//! - The two-phase check coordinator

mod assertions;
mod coordinator;
mod parser;
mod prober;
mod registry;
mod spec;

pub use assertions::{evaluate, AssertionOutcome, Comparator};
pub use coordinator::Coordinator;
pub use parser::{extract_hrefs, parse_document};
pub use prober::{build_http_client, probe, Body, ProbeMethod, ProbeResult};
pub use registry::LinkRegistry;
pub use spec::{Assertion, CheckSpec, FOLLOW_UP_STATUS};

use crate::config::RunPlan;
use crate::report::{Reporter, RunStats};
use crate::Result;
use std::sync::Arc;

/// Runs a complete verification for a normalized plan.
///
/// Dispatches every seed check, waits for the dispatch barrier, sweeps
/// the discovered links, and returns the aggregated statistics.
pub async fn run_checks(
    plan: RunPlan,
    reporter: Arc<dyn Reporter>,
    max_concurrent: usize,
) -> Result<RunStats> {
    let coordinator = Coordinator::new(plan.domain_root, reporter, max_concurrent)?;
    Ok(coordinator.run(plan.checks).await)
}
