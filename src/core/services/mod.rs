//! Business logic services
//!
//! Orchestration logic that operates on domain models and port traits.
//! Nothing in here performs I/O directly.
//!
//! - [`reference`] - Extract order codes from remittance text
//! - [`decision`] - Decide whether a transaction pays an order
//! - [`reconcile`] - Per-transaction reconciliation loop
//! - [`report`] - Render outcomes into the notification body
//! - [`run`] - One complete run including notification

pub mod decision;
pub mod reconcile;
pub mod reference;
pub mod report;
pub mod run;

pub use decision::{Decision, decide};
pub use reconcile::{process, reconcile};
pub use reference::{ParseError, ReferenceParser};
pub use report::Report;
pub use run::{RunContext, RunSummary, run_once};
