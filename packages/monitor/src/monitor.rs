//! The monitor loop and its notification policy.
//!
//! Each tick runs fetch → extract → classify → decide → notify. The
//! decision is a pure function of the tick's outcome and the first-run
//! flag; nothing else is carried between ticks.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::classify::{Classification, Classify, Verdict};
use crate::error::{ClassifyError, FetchError};
use crate::extract::extract_text;
use crate::fetch::FetchPage;
use crate::notify::{Email, Notify};
use crate::report;

/// Outcome of one tick's data gathering.
#[derive(Debug)]
pub enum CheckResult {
    /// The page could not be fetched
    FetchFailed(FetchError),

    /// The page was fetched and classified
    Classified(Classification),

    /// The page was fetched but the classification call failed
    ClassifyFailed(ClassifyError),
}

/// Decide what to notify for a tick.
///
/// Total over all `(CheckResult, first_run)` combinations. `Available`
/// always notifies; every other outcome notifies only on the first run,
/// so the operator gets a startup baseline and then silence until the
/// awaited event. The loop keeps no memory of prior verdicts, so
/// `Available` fires on every tick while tickets remain on sale.
pub fn decide(result: &CheckResult, first_run: bool) -> Option<Email> {
    match result {
        CheckResult::Classified(c) => match (c.verdict, first_run) {
            (Verdict::Available, _) => Some(report::tickets_available(&c.rationale)),
            (Verdict::NotAvailable, true) => Some(report::started_no_tickets(&c.rationale)),
            (Verdict::NoInfo, true) => Some(report::started_no_info(&c.rationale)),
            (Verdict::Unclear, true) => Some(report::started_unclear(&c.rationale)),
            (_, false) => None,
        },
        CheckResult::FetchFailed(e) => {
            first_run.then(|| report::started_fetch_error(&e.to_string()))
        }
        CheckResult::ClassifyFailed(e) => {
            first_run.then(|| report::started_classifier_unreachable(&e.to_string()))
        }
    }
}

/// Orchestrates the periodic ticket check.
pub struct TicketMonitor {
    fetcher: Arc<dyn FetchPage>,
    classifier: Arc<dyn Classify>,
    notifier: Arc<dyn Notify>,
    check_interval: Duration,
}

impl TicketMonitor {
    pub fn new(
        fetcher: Arc<dyn FetchPage>,
        classifier: Arc<dyn Classify>,
        notifier: Arc<dyn Notify>,
        check_interval: Duration,
    ) -> Self {
        Self {
            fetcher,
            classifier,
            notifier,
            check_interval,
        }
    }

    /// Run one check and send at most one notification.
    pub async fn run_check(&self, first_run: bool) {
        info!(first_run, "Starting ticket availability check");

        let result = self.gather().await;

        match &result {
            CheckResult::Classified(c) => {
                info!(verdict = ?c.verdict, "Check classified")
            }
            CheckResult::FetchFailed(e) => error!(error = %e, "Failed to fetch website content"),
            CheckResult::ClassifyFailed(e) => error!(error = %e, "Failed to classify content"),
        }

        if let Some(email) = decide(&result, first_run) {
            // Best effort; a failed send must not abort the loop
            if let Err(e) = self.notifier.notify(&email).await {
                error!(error = %e, subject = %email.subject, "Failed to send notification");
            }
        }
    }

    async fn gather(&self) -> CheckResult {
        let html = match self.fetcher.fetch().await {
            Ok(html) => html,
            Err(e) => return CheckResult::FetchFailed(e),
        };

        let text = extract_text(&html);
        info!(chars = text.chars().count(), "Extracted website text");

        match self.classifier.classify(&text).await {
            Ok(classification) => CheckResult::Classified(classification),
            Err(e) => CheckResult::ClassifyFailed(e),
        }
    }

    /// Run until the token is cancelled.
    ///
    /// Executes the first-run check immediately, then one check per
    /// interval. Ticks are strictly sequential; a slow check delays the
    /// next one rather than overlapping it. Cancellation abandons an
    /// in-flight check instead of letting it finish.
    pub async fn run(&self, shutdown: CancellationToken) {
        info!("Running initial ticket check...");
        tokio::select! {
            _ = shutdown.cancelled() => {
                warn!("Shutdown requested during initial check");
                return;
            }
            _ = self.run_check(true) => {}
        }

        let mut interval = tokio::time::interval(self.check_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        interval.tick().await; // Skip first immediate tick

        info!(
            interval_secs = self.check_interval.as_secs(),
            "Scheduler started"
        );

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    warn!("Shutdown requested, stopping scheduler");
                    break;
                }
                _ = interval.tick() => {
                    tokio::select! {
                        _ = shutdown.cancelled() => {
                            warn!("Shutdown requested, abandoning in-flight check");
                            break;
                        }
                        _ = self.run_check(false) => {}
                    }
                }
            }
        }

        info!("Monitor stopped");
    }
}
