//! Notifier port
//!
//! Defines the interface for delivering run reports.

use thiserror::Error;

/// Errors when delivering a notification
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Sender or recipient address is invalid
    #[error("invalid address {address}: {reason}")]
    Address {
        /// Offending address
        address: String,
        /// Parser message
        reason: String,
    },

    /// Message could not be assembled
    #[error("could not build message: {0}")]
    Build(String),

    /// Message could not be handed to the relay
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Sink for run reports
pub trait Notifier {
    /// Send one notification with a plain-text body
    fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError>;
}
