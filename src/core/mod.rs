//! Core domain logic for bankmatch
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Transaction, Order, Outcome, Severity)
//! - `services/` - Reconciliation logic and run orchestration
//! - `ports/` - Trait definitions for the bank, ticketing and mail systems

pub mod models;
pub mod ports;
pub mod services;
