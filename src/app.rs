//! Process wiring and the timer loop
//!
//! Builds the concrete adapters from the configuration once, then runs one
//! reconciliation per interval. Runs never overlap.

use std::thread;

use chrono::Local;
use log::{info, warn};
use thiserror::Error;

use crate::adapters::{NordigenClient, PretixClient, SetupError, SmtpNotifier};
use crate::config::Config;
use crate::core::ports::NotifyError;
use crate::core::services::{ReferenceParser, RunContext, RunSummary, run_once};

/// Errors that prevent the process from starting
#[derive(Debug, Error)]
pub enum StartupError {
    /// An HTTP adapter could not be built
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// The mail settings are unusable
    #[error("mail setup failed: {0}")]
    Mail(#[from] NotifyError),

    /// The reference pattern could not be compiled
    #[error("invalid reference pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Fully wired application
#[derive(Debug)]
pub struct App {
    config: Config,
    source: NordigenClient,
    orders: PretixClient,
    notifier: SmtpNotifier,
    parser: ReferenceParser,
}

impl App {
    /// Build all adapters from `config`
    pub fn new(config: Config) -> Result<Self, StartupError> {
        let timeout = config.http_timeout;
        match timeout {
            Some(t) => info!("Remote calls time out after {}", humantime::format_duration(t)),
            None => warn!("No HTTP_TIMEOUT set; a hanging remote call stalls the run"),
        }

        Ok(Self {
            source: NordigenClient::new(&config.bank, timeout)?,
            orders: PretixClient::new(&config.ticketing, timeout)?,
            notifier: SmtpNotifier::new(&config.mail, timeout)?,
            parser: ReferenceParser::new(&config.ticketing.event_slug)?,
            config,
        })
    }

    /// Collaborators for one run
    #[must_use]
    pub fn context(&self) -> RunContext<'_> {
        RunContext {
            source: &self.source,
            orders: &self.orders,
            notifier: &self.notifier,
            parser: &self.parser,
            account_id: &self.config.bank.account_id,
            window: self.config.transaction_window,
            settlement_currency: &self.config.settlement_currency,
            subject_prefix: &self.config.mail.subject_prefix,
        }
    }

    /// Execute a single run now
    pub fn run_once(&self) -> RunSummary {
        run_once(&self.context(), Local::now())
    }

    /// Run forever, sleeping `RUN_INTERVAL` between runs
    pub fn run_forever(&self) -> ! {
        let interval = humantime::format_duration(self.config.run_interval);
        info!(
            "Reconciling event {} every {interval}",
            self.parser.event_slug()
        );

        loop {
            match self.run_once() {
                RunSummary::Completed { outcomes, notified } => {
                    info!("Run completed with {} outcomes (report sent: {notified})", outcomes.len());
                },
                RunSummary::Aborted { error, notified } => {
                    warn!("Run aborted: {error} (notice sent: {notified})");
                },
            }

            info!("Next run in {interval}");
            thread::sleep(self.config.run_interval);
        }
    }
}
