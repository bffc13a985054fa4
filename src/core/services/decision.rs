//! Payment decision table
//!
//! Pure logic deciding whether a transaction pays an order. Rules are
//! evaluated in order and the first match wins:
//!
//! 1. pending approval → error
//! 2. paid → warning
//! 3. expired → error
//! 4. canceled → error
//! 5. unknown status → error
//! 6. unpaid with matching total and settlement currency → mark paid
//! 7. anything else → amount mismatch error

use crate::core::models::{Disposition, Order, OrderStatus, Transaction};

/// What to do with an order for a given transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Mark the order as paid
    MarkPaid,
    /// Leave the order untouched and record the reason
    Reject {
        /// Terminal state to record
        disposition: Disposition,
        /// Human-readable reason
        reason: String,
    },
}

impl Decision {
    fn reject(disposition: Disposition, reason: impl Into<String>) -> Self {
        Self::Reject {
            disposition,
            reason: reason.into(),
        }
    }
}

/// Decide whether `transaction` pays `order`
///
/// Both the transaction currency and, when reported, the order currency
/// must equal `settlement_currency` (compared case-insensitively).
#[must_use]
pub fn decide(order: &Order, transaction: &Transaction, settlement_currency: &str) -> Decision {
    match &order.status {
        OrderStatus::PendingApproval => Decision::reject(Disposition::Pending, "Order is pending"),
        OrderStatus::Paid => Decision::reject(Disposition::AlreadyPaid, "Order is already paid"),
        OrderStatus::Expired => Decision::reject(Disposition::Expired, "Order is expired"),
        OrderStatus::Canceled => Decision::reject(Disposition::Canceled, "Order is canceled"),
        OrderStatus::Unknown(code) => Decision::reject(
            Disposition::UnhandledStatus,
            format!("Order has unhandled status '{code}'"),
        ),
        OrderStatus::Unpaid => {
            let order_currency_ok = order
                .currency
                .as_deref()
                .is_none_or(|c| c.eq_ignore_ascii_case(settlement_currency));
            let transaction_currency_ok =
                transaction.currency.eq_ignore_ascii_case(settlement_currency);

            if order.total == transaction.amount && transaction_currency_ok && order_currency_ok {
                Decision::MarkPaid
            } else {
                Decision::reject(
                    Disposition::AmountMismatch,
                    format!(
                        "amount doesn't match Order: {} Transaction: {} {}",
                        order.total, transaction.amount, transaction.currency
                    ),
                )
            }
        },
    }
}
