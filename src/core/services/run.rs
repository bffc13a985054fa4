//! Single reconciliation run
//!
//! Fetches transactions, reconciles them, and sends exactly one
//! notification: either the report or a description of the fetch failure.

use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use log::{error, info};

use crate::core::models::{BookingWindow, Outcome};
use crate::core::ports::{FetchError, Notifier, OrderBook, TransactionSource};

use super::reconcile::reconcile;
use super::reference::ReferenceParser;
use super::report::Report;

/// Collaborators and settings for one run
#[derive(Clone, Copy)]
pub struct RunContext<'a> {
    /// Bank transaction source
    pub source: &'a dyn TransactionSource,
    /// Ticketing order book
    pub orders: &'a dyn OrderBook,
    /// Report sink
    pub notifier: &'a dyn Notifier,
    /// Reference parser for the configured event
    pub parser: &'a ReferenceParser,
    /// Bank account to poll
    pub account_id: &'a str,
    /// How far back to look for booked transactions
    pub window: Duration,
    /// Currency orders are settled in
    pub settlement_currency: &'a str,
    /// Prefix of the notification subject
    pub subject_prefix: &'a str,
}

impl std::fmt::Debug for RunContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunContext")
            .field("parser", &self.parser)
            .field("account_id", &self.account_id)
            .field("window", &self.window)
            .field("settlement_currency", &self.settlement_currency)
            .field("subject_prefix", &self.subject_prefix)
            .finish_non_exhaustive()
    }
}

/// Result of one run
#[derive(Debug)]
pub enum RunSummary {
    /// All transactions were processed and a report was sent
    Completed {
        /// Outcomes in transaction order
        outcomes: Vec<Outcome>,
        /// Whether the report was delivered
        notified: bool,
    },
    /// Transactions could not be fetched; nothing was processed
    Aborted {
        /// Fetch failure
        error: FetchError,
        /// Whether the failure notice was delivered
        notified: bool,
    },
}

impl RunSummary {
    /// Whether the notification for this run was delivered
    #[must_use]
    pub const fn notified(&self) -> bool {
        match self {
            Self::Completed { notified, .. } | Self::Aborted { notified, .. } => *notified,
        }
    }
}

/// Notification subject for a run started at `now`
#[must_use]
pub fn subject(prefix: &str, now: DateTime<Local>) -> String {
    format!("{prefix} {}", now.format("%d-%m-%Y %H:%M"))
}

/// Execute one reconciliation run
pub fn run_once(ctx: &RunContext<'_>, now: DateTime<Local>) -> RunSummary {
    let subject = subject(ctx.subject_prefix, now);
    let window = BookingWindow::trailing(now.with_timezone(&Utc), ctx.window);

    info!(
        "Fetching booked transactions from {} to {}",
        window.from_param(),
        window.to_param()
    );

    let transactions = match ctx.source.booked_transactions(ctx.account_id, &window) {
        Ok(transactions) => transactions,
        Err(e) => {
            let body = format!("Error getting transactions: {e}");
            error!("{body}");
            let notified = deliver(ctx.notifier, &subject, &body);
            return RunSummary::Aborted { error: e, notified };
        },
    };

    info!("Fetched {} booked transactions", transactions.len());

    let outcomes = reconcile(&transactions, ctx.parser, ctx.orders, ctx.settlement_currency);
    let report = Report::from_outcomes(&outcomes);

    info!(
        "Run finished: {} errors, {} successes, {} warnings",
        report.errors.len(),
        report.successes.len(),
        report.warnings.len()
    );

    let notified = deliver(ctx.notifier, &subject, &report.render());
    RunSummary::Completed { outcomes, notified }
}

fn deliver(notifier: &dyn Notifier, subject: &str, body: &str) -> bool {
    match notifier.notify(subject, body) {
        Ok(()) => true,
        Err(e) => {
            error!("Error sending mail: {e}");
            false
        },
    }
}
