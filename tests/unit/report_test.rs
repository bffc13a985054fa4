//! Tests for report rendering

use bankmatch::core::models::{Disposition, Outcome};
use bankmatch::core::services::Report;
use bankmatch::core::services::report::NO_ISSUES_BODY;
use rust_decimal_macros::dec;

use crate::common::transaction;

fn outcome(id: &str, code: Option<&str>, disposition: Disposition, reason: &str) -> Outcome {
    let remittance = code.map_or_else(|| "Rent".to_string(), |c| format!("FEST-{c}"));
    Outcome::new(&transaction(id, &remittance, dec!(42.00)), code, disposition, reason)
}

#[test]
fn empty_run_states_no_issues() {
    let report = Report::from_outcomes(&[]);
    assert!(report.is_empty());
    assert_eq!(report.render(), NO_ISSUES_BODY);
}

#[test]
fn outcomes_are_grouped_by_severity() {
    let report = Report::from_outcomes(&[
        outcome("t1", None, Disposition::ParseError, "couldn't parse remittance info"),
        outcome("t2", Some("A1B2C"), Disposition::MarkedPaid, "Order marked as paid"),
        outcome("t3", Some("QWERT"), Disposition::AlreadyPaid, "Order is already paid"),
        outcome("t4", Some("ZZZZZ"), Disposition::Canceled, "Order is canceled"),
    ]);

    assert_eq!(report.errors.len(), 2);
    assert_eq!(report.successes.len(), 1);
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn counts_and_section_order() {
    let body = Report::from_outcomes(&[
        outcome("t1", Some("QWERT"), Disposition::AlreadyPaid, "Order is already paid"),
        outcome("t2", Some("A1B2C"), Disposition::MarkedPaid, "Order marked as paid"),
    ])
    .render();

    let errors = body.find("0 errors marking orders as paid").unwrap();
    let successes = body.find("1 successfull marked orders as paid").unwrap();
    let warnings = body.find("1 warnings marking orders as paid").unwrap();
    assert!(errors < successes && successes < warnings);
}

#[test]
fn section_headers() {
    let body = Report::from_outcomes(&[outcome(
        "t1",
        Some("A1B2C"),
        Disposition::MarkedPaid,
        "Order marked as paid",
    )])
    .render();

    assert!(body.contains("BookingDate,OrderCode,FromAccount,RemittanceInformation,Reason\n"));
    assert!(body.contains("BookingDate,OrderCode,FromAccount,BankTransactionCode,RemittanceInformation\n"));
}

#[test]
fn error_row_layout() {
    let body = Report::from_outcomes(&[outcome(
        "t1",
        Some("A1B2C"),
        Disposition::Expired,
        "Order is expired",
    )])
    .render();

    assert!(body.contains("2024-05-01,A1B2C,DE89370400440532013000,FEST-A1B2C,Order is expired\n"));
}

#[test]
fn unparsed_outcome_has_empty_code_column() {
    let body = Report::from_outcomes(&[outcome(
        "t1",
        None,
        Disposition::ParseError,
        "couldn't parse remittance info",
    )])
    .render();

    assert!(body.contains("2024-05-01,,DE89370400440532013000,Rent,couldn't parse remittance info\n"));
}
