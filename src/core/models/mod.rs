//! Domain models for bankmatch
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Transaction`] - A booked bank transaction
//! - [`Order`] - A ticketing order and its [`OrderStatus`]
//! - [`Outcome`] - What happened to one transaction during a run
//! - [`Severity`] - Report section of an outcome

mod order;
mod outcome;
mod severity;
mod transaction;

pub use order::{Order, OrderStatus};
pub use outcome::{Disposition, Outcome};
pub use severity::Severity;
pub use transaction::{BookingWindow, Transaction};
