//! Transaction source port
//!
//! Defines the interface for listing booked bank transactions.

use thiserror::Error;

use super::super::models::{BookingWindow, Transaction};

/// Errors that abort fetching transactions for a run
#[derive(Debug, Error)]
pub enum FetchError {
    /// Access token could not be obtained
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Request could not be sent or the response could not be read
    #[error("request failed: {0}")]
    Transport(String),

    /// Provider answered with a non-success status
    #[error("bank data API returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnosis
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("could not decode transactions: {0}")]
    Decode(String),
}

/// Source of booked bank transactions
///
/// Implementations return only settled transactions; pending ones are
/// dropped before they reach the reconciliation loop.
pub trait TransactionSource {
    /// List booked transactions of `account_id` within `window`
    fn booked_transactions(
        &self,
        account_id: &str,
        window: &BookingWindow,
    ) -> Result<Vec<Transaction>, FetchError>;
}
