//! Ticketing order model

use rust_decimal::Decimal;

/// Lifecycle state of a ticketing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    /// Waiting for organizer approval, payment not yet expected
    PendingApproval,
    /// Placed and awaiting payment
    Unpaid,
    /// Payment already recorded
    Paid,
    /// Payment deadline passed
    Expired,
    /// Canceled by the buyer or organizer
    Canceled,
    /// Status code this tool does not know how to handle
    Unknown(String),
}

impl OrderStatus {
    /// Map a pretix status code (`n`, `p`, `e`, `c`) to a status
    ///
    /// Orders in state `n` that still require approval are reported as
    /// [`OrderStatus::PendingApproval`].
    #[must_use]
    pub fn from_pretix(code: &str, require_approval: bool) -> Self {
        match code {
            "n" if require_approval => Self::PendingApproval,
            "n" => Self::Unpaid,
            "p" => Self::Paid,
            "e" => Self::Expired,
            "c" => Self::Canceled,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PendingApproval => write!(f, "pending-approval"),
            Self::Unpaid => write!(f, "unpaid"),
            Self::Paid => write!(f, "paid"),
            Self::Expired => write!(f, "expired"),
            Self::Canceled => write!(f, "canceled"),
            Self::Unknown(code) => write!(f, "unknown ({code})"),
        }
    }
}

/// A ticketing order as returned by the ticketing system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Short alphanumeric order code
    pub code: String,

    /// Current status
    pub status: OrderStatus,

    /// Total amount due
    pub total: Decimal,

    /// Currency of `total`, when the ticketing system reports one
    pub currency: Option<String>,
}
