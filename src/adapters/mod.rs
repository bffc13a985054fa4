//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `nordigen` - GoCardless Bank Account Data transaction source
//! - `pretix` - pretix order book
//! - `smtp` - SMTP report delivery
//! - `http` - Client construction and URL helpers shared by the REST adapters

pub mod http;
pub mod nordigen;
pub mod pretix;
pub mod smtp;

pub use http::SetupError;
pub use nordigen::NordigenClient;
pub use pretix::PretixClient;
pub use smtp::SmtpNotifier;
