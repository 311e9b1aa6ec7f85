//! Check coordinator - two-phase verification orchestration
//!
//! A run has exactly two waves of concurrent work:
//!
//! 1. **Dispatch phase**: every configured check is probed concurrently.
//!    Pages whose status matches feed their structural assertions and,
//!    when harvesting is enabled, their outbound links into the registry.
//! 2. **Sweep phase**: after all dispatch-phase probes have completed,
//!    every registered, undispatched, non-seed internal URL gets exactly
//!    one HEAD probe expecting HTTP 200.
//!
//! The barrier between the phases guarantees the registry is fully
//! populated before any dedup-and-dispatch decision is made. Links
//! discovered by sweep-phase pages are never followed.

use crate::check::assertions::{evaluate, AssertionOutcome};
use crate::check::parser::{extract_hrefs, parse_document};
use crate::check::prober::{build_http_client, probe, Body, ProbeMethod, ProbeResult};
use crate::check::registry::LinkRegistry;
use crate::check::CheckSpec;
use crate::report::{CheckEvent, EventKind, Reporter, RunStats};
use crate::SitecheckError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Orchestrates one verification run.
pub struct Coordinator {
    client: Client,
    registry: Arc<LinkRegistry>,
    reporter: Arc<dyn Reporter>,
    limiter: Arc<Semaphore>,
}

impl Coordinator {
    /// Creates a coordinator for the given domain root.
    ///
    /// `max_concurrent` bounds the number of in-flight probes across both
    /// phases; every check still runs as its own task.
    pub fn new(
        domain_root: impl Into<String>,
        reporter: Arc<dyn Reporter>,
        max_concurrent: usize,
    ) -> Result<Self, SitecheckError> {
        let client = build_http_client()?;

        Ok(Self {
            client,
            registry: Arc::new(LinkRegistry::new(domain_root)),
            reporter,
            limiter: Arc::new(Semaphore::new(max_concurrent.max(1))),
        })
    }

    /// The link registry backing this run.
    pub fn registry(&self) -> Arc<LinkRegistry> {
        Arc::clone(&self.registry)
    }

    /// Runs both phases to completion and returns aggregated statistics.
    pub async fn run(&self, checks: Vec<CheckSpec>) -> RunStats {
        let mut stats = RunStats::new();
        let started = Instant::now();

        tracing::info!("Dispatching {} configured checks", checks.len());
        self.dispatch_phase(checks, &mut stats).await;

        stats.links_discovered = self.registry.len() as u64;
        tracing::info!(
            "Dispatch phase complete: {} internal links discovered",
            stats.links_discovered
        );

        self.sweep_phase(&mut stats).await;

        tracing::info!(
            "Run complete: {} checks, {} failures, {:?} elapsed",
            stats.checks_run,
            stats.failures(),
            started.elapsed()
        );

        stats
    }

    /// Probes every seed check concurrently and blocks until all have
    /// completed. Seeds are recorded in the source-checked set before
    /// their probe launches, so the sweep phase can never re-check them.
    async fn dispatch_phase(&self, checks: Vec<CheckSpec>, stats: &mut RunStats) {
        let mut tasks = JoinSet::new();

        for spec in checks {
            self.registry.record_source(&spec.url);
            self.spawn_check(&mut tasks, spec).await;
        }

        self.join_all(&mut tasks, stats).await;
    }

    /// Dispatches one HEAD probe per registered, undispatched, non-seed
    /// URL and blocks until the wave completes. The registry contents are
    /// frozen by the dispatch barrier; `mark_dispatched_if_new` still
    /// guards every launch so no URL can be probed twice.
    async fn sweep_phase(&self, stats: &mut RunStats) {
        let mut tasks = JoinSet::new();

        for (href, referrers) in self.registry.undispatched() {
            let full_url = self.registry.resolve(&href);

            if self.registry.is_source(&full_url) {
                tracing::debug!("Skipping {}: already checked as a seed", full_url);
                continue;
            }

            if !self.registry.mark_dispatched_if_new(&full_url) {
                continue;
            }

            tracing::debug!(
                "Follow-up check for {} (referenced by {})",
                full_url,
                referrers.join(", ")
            );

            stats.follow_up_checks += 1;
            self.spawn_check(&mut tasks, CheckSpec::follow_up(full_url))
                .await;
        }

        self.join_all(&mut tasks, stats).await;
    }

    /// Spawns one checking task, holding a limiter permit for its whole
    /// lifetime.
    async fn spawn_check(&self, tasks: &mut JoinSet<EventKind>, spec: CheckSpec) {
        let permit = self
            .limiter
            .clone()
            .acquire_owned()
            .await
            .expect("limiter closed");

        let client = self.client.clone();
        let registry = Arc::clone(&self.registry);
        let reporter = Arc::clone(&self.reporter);

        tasks.spawn(async move {
            let _permit = permit;
            run_check(&client, &spec, &registry, reporter.as_ref()).await
        });
    }

    /// Barrier: drains the join set, folding each check's terminal
    /// outcome into the statistics.
    async fn join_all(&self, tasks: &mut JoinSet<EventKind>, stats: &mut RunStats) {
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(kind) => stats.record(kind),
                Err(e) => {
                    tracing::error!("Check task failed to complete: {}", e);
                    stats.record(EventKind::SystemFailure);
                }
            }
        }
    }
}

/// Runs a single check to its terminal outcome.
///
/// Status is evaluated first; assertions and link harvesting only run on
/// a matching status. Every failure is converted into a reporter event
/// here and never propagates, so a broken check cannot abort its siblings.
async fn run_check(
    client: &Client,
    spec: &CheckSpec,
    registry: &LinkRegistry,
    reporter: &dyn Reporter,
) -> EventKind {
    let method = ProbeMethod::for_check(spec);
    tracing::debug!("Probing {} with {:?}", spec.url, method);

    let (status, body) = match probe(client, method, &spec.url).await {
        ProbeResult::Response { status, body } => (status, body),
        ProbeResult::NetworkError { error } => {
            tracing::debug!("Request to {} failed: {}", spec.url, error);
            reporter.notify(&CheckEvent::request_failed(&spec.url));
            return EventKind::SystemFailure;
        }
    };

    if status != spec.expected_status {
        reporter.notify(&CheckEvent::status_mismatch(
            &spec.url,
            spec.expected_status,
            status,
        ));
        return EventKind::StatusMismatch;
    }

    reporter.notify(&CheckEvent::status_confirmed(&spec.url, spec.expected_status));

    let text = match body {
        // HEAD probe: a matching status is the whole check.
        Body::None => return EventKind::Success,
        Body::ReadFailed(error) => {
            tracing::debug!("Body read from {} failed: {}", spec.url, error);
            reporter.notify(&CheckEvent::body_read_failed(&spec.url));
            return EventKind::SystemFailure;
        }
        Body::Text(text) => text,
    };

    // No awaits below: the parsed document must not cross a suspension
    // point.
    let document = parse_document(&text);
    let mut any_assertion_failed = false;

    for assertion in &spec.assertions {
        let event = match evaluate(&document, assertion) {
            AssertionOutcome::Pass {
                selector,
                comparator,
                expected,
                ..
            } => CheckEvent::assertion_confirmed(&spec.url, &selector, &comparator, expected),
            AssertionOutcome::Fail {
                selector,
                comparator,
                expected,
                count,
            } => {
                any_assertion_failed = true;
                CheckEvent::assertion_failed(&spec.url, &selector, &comparator, expected, count)
            }
            AssertionOutcome::UnsupportedComparator { comparator } => {
                any_assertion_failed = true;
                CheckEvent::unsupported_comparator(&spec.url, &comparator)
            }
            AssertionOutcome::BadSelector { selector } => {
                any_assertion_failed = true;
                CheckEvent::bad_selector(&spec.url, &selector)
            }
        };
        reporter.notify(&event);
    }

    if spec.harvest_links {
        for href in extract_hrefs(&document) {
            registry.record(&href, &spec.url);
        }
    }

    if any_assertion_failed {
        EventKind::AssertionFailure
    } else {
        EventKind::Success
    }
}
