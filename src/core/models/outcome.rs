//! Reconciliation outcome model
//!
//! One [`Outcome`] is recorded for every transaction that was not skipped.
//! Outcomes live for a single run and only feed the report.

use chrono::NaiveDate;

use super::{Severity, Transaction};

/// Terminal state of a single transaction within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Remittance text did not contain an order code
    ParseError,
    /// Order could not be retrieved
    LookupError,
    /// Order is waiting for approval
    Pending,
    /// Order was already paid
    AlreadyPaid,
    /// Order is expired
    Expired,
    /// Order is canceled
    Canceled,
    /// Order has a status the decision table does not cover
    UnhandledStatus,
    /// Amount or currency differs from the order
    AmountMismatch,
    /// Order was marked as paid
    MarkedPaid,
    /// Marking the order as paid failed
    MarkError,
}

impl Disposition {
    /// Severity this disposition is reported with
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::AlreadyPaid => Severity::Warning,
            Self::MarkedPaid => Severity::Success,
            Self::ParseError
            | Self::LookupError
            | Self::Pending
            | Self::Expired
            | Self::Canceled
            | Self::UnhandledStatus
            | Self::AmountMismatch
            | Self::MarkError => Severity::Error,
        }
    }
}

/// Recorded result of processing one transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Terminal state reached
    pub disposition: Disposition,

    /// Report section
    pub severity: Severity,

    /// Order code, if the remittance text could be parsed
    pub order_code: Option<String>,

    /// IBAN of the paying account
    pub from_account: String,

    /// Booking date of the transaction
    pub booking_date: NaiveDate,

    /// Remittance text as received
    pub remittance: String,

    /// Bank transaction code
    pub bank_transaction_code: String,

    /// Provider transaction id
    pub transaction_id: String,

    /// Human-readable reason
    pub reason: String,
}

impl Outcome {
    /// Record `disposition` for `transaction`
    #[must_use]
    pub fn new(
        transaction: &Transaction,
        order_code: Option<&str>,
        disposition: Disposition,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            disposition,
            severity: disposition.severity(),
            order_code: order_code.map(ToString::to_string),
            from_account: transaction.debtor_iban.clone(),
            booking_date: transaction.booking_date,
            remittance: transaction.remittance.clone(),
            bank_transaction_code: transaction.bank_transaction_code.clone(),
            transaction_id: transaction.id.clone(),
            reason: reason.into(),
        }
    }

    /// Order code or an empty string
    #[must_use]
    pub fn order_code_or_empty(&self) -> &str {
        self.order_code.as_deref().unwrap_or("")
    }
}
