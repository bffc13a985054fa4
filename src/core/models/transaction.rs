//! Bank transaction model
//!
//! A transaction is one booked money movement reported by the banking-data
//! provider. Only incoming transfers carry a debtor IBAN.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// A booked bank transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Provider-assigned transaction id
    pub id: String,

    /// Day the transaction was booked
    pub booking_date: NaiveDate,

    /// Transferred amount
    pub amount: Decimal,

    /// ISO 4217 currency code of `amount`
    pub currency: String,

    /// IBAN of the paying account (empty for outgoing transfers)
    pub debtor_iban: String,

    /// Name of the paying account holder, if reported
    pub debtor_name: Option<String>,

    /// Free-text reference entered by the payer
    pub remittance: String,

    /// Bank transaction code reported by the provider
    pub bank_transaction_code: String,
}

impl Transaction {
    /// Whether this transaction is an incoming transfer with a reference
    ///
    /// Transactions without a debtor IBAN are withdrawals, and deposits
    /// without remittance text cannot reference an order.
    #[must_use]
    pub fn is_reconcilable(&self) -> bool {
        !self.debtor_iban.is_empty() && !self.remittance.is_empty()
    }
}

/// Inclusive range of booking dates to query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    /// First booking date (inclusive)
    pub date_from: NaiveDate,

    /// Last booking date (inclusive)
    pub date_to: NaiveDate,
}

impl BookingWindow {
    /// Window covering `duration` before `now`, in UTC calendar days
    #[must_use]
    pub fn trailing(now: DateTime<Utc>, duration: std::time::Duration) -> Self {
        let span = chrono::Duration::from_std(duration).unwrap_or(chrono::Duration::MAX);
        let start = now.checked_sub_signed(span).unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self {
            date_from: start.date_naive(),
            date_to: now.date_naive(),
        }
    }

    /// `date_from` formatted as an ISO 8601 date
    #[must_use]
    pub fn from_param(&self) -> String {
        self.date_from.format("%Y-%m-%d").to_string()
    }

    /// `date_to` formatted as an ISO 8601 date
    #[must_use]
    pub fn to_param(&self) -> String {
        self.date_to.format("%Y-%m-%d").to_string()
    }
}
