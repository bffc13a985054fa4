//! bankmatch - Reconcile bank transfers against pretix ticket orders
//!
//! This library polls booked transactions from a bank data provider, extracts
//! order codes from the transfer references, marks matching ticket orders as
//! paid, and reports the outcome of every run by mail.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
