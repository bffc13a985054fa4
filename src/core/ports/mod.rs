//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the reconciliation logic
//! and external systems (bank data provider, ticketing system, mail relay).
//!
//! Implementations live in the `adapters` module.
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations, so runs can be exercised in tests without network I/O.

mod notifier;
mod order_book;
mod transaction_source;

pub use notifier::{Notifier, NotifyError};
pub use order_book::{LookupError, MarkError, OrderBook};
pub use transaction_source::{FetchError, TransactionSource};
