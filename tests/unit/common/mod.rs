//! Mock implementations of port traits and transaction fixtures
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations. Every call is recorded so tests can
//! assert on exactly which remote operations a run performed.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use bankmatch::core::models::{BookingWindow, Order, OrderStatus, Transaction};
use bankmatch::core::ports::{
    FetchError, LookupError, MarkError, Notifier, NotifyError, OrderBook, TransactionSource,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub const IBAN: &str = "DE89370400440532013000";

/// Build an incoming EUR transaction
pub fn transaction(id: &str, remittance: &str, amount: Decimal) -> Transaction {
    Transaction {
        id: id.to_string(),
        booking_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        amount,
        currency: "EUR".to_string(),
        debtor_iban: IBAN.to_string(),
        debtor_name: Some("Erika Mustermann".to_string()),
        remittance: remittance.to_string(),
        bank_transaction_code: "PMNT-RCDT-ESCT".to_string(),
    }
}

/// Build an order in EUR
pub fn order(code: &str, status: OrderStatus, total: Decimal) -> Order {
    Order {
        code: code.to_string(),
        status,
        total,
        currency: Some("EUR".to_string()),
    }
}

/// Mock implementation of TransactionSource
pub struct MockTransactionSource {
    result: RefCell<Option<Result<Vec<Transaction>, FetchError>>>,
    pub calls: RefCell<Vec<(String, BookingWindow)>>,
}

impl MockTransactionSource {
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            result: RefCell::new(Some(Ok(transactions))),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            result: RefCell::new(Some(Err(error))),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl TransactionSource for MockTransactionSource {
    fn booked_transactions(
        &self,
        account_id: &str,
        window: &BookingWindow,
    ) -> Result<Vec<Transaction>, FetchError> {
        self.calls.borrow_mut().push((account_id.to_string(), *window));
        self.result.borrow_mut().take().unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Mock implementation of OrderBook
#[derive(Default)]
pub struct MockOrderBook {
    orders: HashMap<String, Order>,
    fail_mark: bool,
    pub lookups: RefCell<Vec<String>>,
    pub marked: RefCell<Vec<String>>,
}

impl MockOrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: orders.into_iter().map(|o| (o.code.clone(), o)).collect(),
            ..Self::default()
        }
    }

    pub fn failing_marks(mut self) -> Self {
        self.fail_mark = true;
        self
    }
}

impl OrderBook for MockOrderBook {
    fn order(&self, code: &str) -> Result<Order, LookupError> {
        self.lookups.borrow_mut().push(code.to_string());
        self.orders.get(code).cloned().ok_or_else(|| LookupError::NotFound(code.to_string()))
    }

    fn mark_paid(&self, code: &str) -> Result<(), MarkError> {
        self.marked.borrow_mut().push(code.to_string());
        if self.fail_mark {
            Err(MarkError::Status { status: 409 })
        } else {
            Ok(())
        }
    }
}

/// Mock implementation of Notifier
#[derive(Default)]
pub struct MockNotifier {
    fail: bool,
    pub attempts: Cell<usize>,
    pub sent: RefCell<Vec<(String, String)>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Body of the only notification sent
    pub fn single_body(&self) -> String {
        let sent = self.sent.borrow();
        assert_eq!(sent.len(), 1, "expected exactly one notification");
        sent[0].1.clone()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        self.attempts.set(self.attempts.get() + 1);
        if self.fail {
            return Err(NotifyError::Delivery("connection refused".to_string()));
        }
        self.sent.borrow_mut().push((subject.to_string(), body.to_string()));
        Ok(())
    }
}
