//! SMTP notifier
//!
//! Sends the run report as a plain-text mail through an authenticated relay.
//! Port 465 uses implicit TLS. On every other port the relay must offer
//! STARTTLS; the connection fails instead of falling back to plaintext, so a
//! relay that only speaks unencrypted SMTP (typically port 25) is rejected.

use std::time::Duration;

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::info;

use crate::config::MailConfig;
use crate::core::ports::{Notifier, NotifyError};

/// Port on which the relay expects implicit TLS
pub const SMTPS_PORT: u16 = 465;

/// Notifier delivering mail over SMTP
pub struct SmtpNotifier {
    transport: SmtpTransport,
    server: String,
    sender: Mailbox,
    recipients: Vec<Mailbox>,
}

impl std::fmt::Debug for SmtpNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpNotifier")
            .field("server", &self.server)
            .field("sender", &self.sender)
            .field("recipients", &self.recipients)
            .finish_non_exhaustive()
    }
}

impl SmtpNotifier {
    /// Create a notifier from the mail settings
    ///
    /// Addresses are validated here so that a typo fails at startup rather
    /// than after the first run.
    pub fn new(config: &MailConfig, timeout: Option<Duration>) -> Result<Self, NotifyError> {
        let sender = parse_mailbox(&config.sender)?;
        let recipients =
            config.recipients.iter().map(|r| parse_mailbox(r)).collect::<Result<Vec<_>, _>>()?;

        let builder = if config.port == SMTPS_PORT {
            SmtpTransport::relay(&config.server)
        } else {
            SmtpTransport::starttls_relay(&config.server)
        }
        .map_err(|e| NotifyError::Build(e.to_string()))?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.expose().to_string(),
            ))
            .timeout(timeout)
            .build();

        Ok(Self {
            transport,
            server: format!("{}:{}", config.server, config.port),
            sender,
            recipients,
        })
    }
}

impl Notifier for SmtpNotifier {
    fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        let mut builder = Message::builder().from(self.sender.clone()).subject(subject);
        for recipient in &self.recipients {
            builder = builder.to(recipient.clone());
        }

        let message = builder
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        self.transport.send(&message).map_err(|e| NotifyError::Delivery(e.to_string()))?;

        info!("Sent \"{subject}\" to {} recipient(s) via {}", self.recipients.len(), self.server);
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address.parse().map_err(|e: lettre::address::AddressError| NotifyError::Address {
        address: address.to_string(),
        reason: e.to_string(),
    })
}
