//! Order book port
//!
//! Defines the interface for reading orders from the ticketing system and
//! marking them as paid.

use thiserror::Error;

use super::super::models::Order;

/// Errors when retrieving an order
#[derive(Debug, Error)]
pub enum LookupError {
    /// No order with this code exists in the event
    #[error("order {0} not found")]
    NotFound(String),

    /// Request could not be sent or the response could not be read
    #[error("request failed: {0}")]
    Transport(String),

    /// Ticketing system answered with a non-success status
    #[error("ticketing API returned non-200 status code: {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Response body did not match the expected shape
    #[error("could not decode order: {0}")]
    Decode(String),
}

/// Errors when marking an order as paid
#[derive(Debug, Error)]
pub enum MarkError {
    /// Request could not be sent or the response could not be read
    #[error("request failed: {0}")]
    Transport(String),

    /// Ticketing system refused the state transition
    #[error("ticketing API returned non-200 status code: {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },
}

/// Order storage of the ticketing system
///
/// The ticketing system owns the order state machine. Marking an order that
/// is already paid is expected to be rejected remotely.
pub trait OrderBook {
    /// Retrieve an order by its code
    fn order(&self, code: &str) -> Result<Order, LookupError>;

    /// Transition an unpaid order to paid
    fn mark_paid(&self, code: &str) -> Result<(), MarkError>;
}
