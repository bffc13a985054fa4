//! Reconciliation loop
//!
//! Walks the fetched transactions one at a time and drives
//! parse → lookup → decide → mark for each of them. Per-transaction failures
//! are recorded as outcomes and never abort the loop.

use log::{debug, info, warn};

use crate::core::models::{Disposition, Outcome, Transaction};
use crate::core::ports::OrderBook;

use super::decision::{Decision, decide};
use super::reference::ReferenceParser;

/// Reconcile `transactions` against `orders`
///
/// Returns one outcome per transaction that was not skipped, in input order.
/// The list is built fresh for every call.
pub fn reconcile(
    transactions: &[Transaction],
    parser: &ReferenceParser,
    orders: &dyn OrderBook,
    settlement_currency: &str,
) -> Vec<Outcome> {
    transactions
        .iter()
        .filter_map(|tx| process(tx, parser, orders, settlement_currency))
        .collect()
}

/// Process a single transaction to its terminal state
///
/// Returns `None` when the transaction is skipped.
pub fn process(
    transaction: &Transaction,
    parser: &ReferenceParser,
    orders: &dyn OrderBook,
    settlement_currency: &str,
) -> Option<Outcome> {
    if !transaction.is_reconcilable() {
        debug!("Skipping transaction {} without debtor IBAN or reference", transaction.id);
        return None;
    }

    let code = match parser.parse(&transaction.remittance) {
        Ok(code) => code,
        Err(e) => {
            warn!("{e} RemittanceInfo: {}", transaction.remittance);
            return Some(Outcome::new(transaction, None, Disposition::ParseError, e.to_string()));
        },
    };

    let order = match orders.order(&code) {
        Ok(order) => order,
        Err(e) => {
            warn!("{e} OrderCode: {code}");
            return Some(Outcome::new(
                transaction,
                Some(&code),
                Disposition::LookupError,
                e.to_string(),
            ));
        },
    };

    let (disposition, reason) = match decide(&order, transaction, settlement_currency) {
        Decision::Reject {
            disposition,
            reason,
        } => (disposition, reason),
        Decision::MarkPaid => match orders.mark_paid(&code) {
            Ok(()) => (Disposition::MarkedPaid, "Order marked as paid".to_string()),
            Err(e) => (Disposition::MarkError, e.to_string()),
        },
    };

    if disposition == Disposition::MarkedPaid {
        info!("Marked order {code} as paid (transaction {})", transaction.id);
    } else {
        warn!("{reason}. Please check {code}");
    }

    Some(Outcome::new(transaction, Some(&code), disposition, reason))
}
