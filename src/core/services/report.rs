//! Run report rendering
//!
//! Groups outcomes by severity and renders each group as a CSV block with a
//! count line on top. Sections appear in the order errors, successes,
//! warnings.

use csv::{Terminator, WriterBuilder};

use crate::core::models::{Outcome, Severity};

/// Body sent when a run produced no outcomes at all
pub const NO_ISSUES_BODY: &str = "No issues occurred. No transactions required reconciliation.";

const ISSUE_HEADER: [&str; 5] =
    ["BookingDate", "OrderCode", "FromAccount", "RemittanceInformation", "Reason"];
const SUCCESS_HEADER: [&str; 5] =
    ["BookingDate", "OrderCode", "FromAccount", "BankTransactionCode", "RemittanceInformation"];

/// Outcomes of one run grouped by severity
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Error outcomes
    pub errors: Vec<Outcome>,
    /// Success outcomes
    pub successes: Vec<Outcome>,
    /// Warning outcomes
    pub warnings: Vec<Outcome>,
}

impl Report {
    /// Group `outcomes` by severity, keeping their order
    #[must_use]
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            match outcome.severity {
                Severity::Error => report.errors.push(outcome.clone()),
                Severity::Success => report.successes.push(outcome.clone()),
                Severity::Warning => report.warnings.push(outcome.clone()),
            }
        }
        report
    }

    /// Whether the run produced no outcomes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.successes.is_empty() && self.warnings.is_empty()
    }

    /// Render the notification body
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_empty() {
            return NO_ISSUES_BODY.to_string();
        }

        let errors = render_section(&ISSUE_HEADER, &self.errors, issue_row);
        let successes = render_section(&SUCCESS_HEADER, &self.successes, success_row);
        let warnings = render_section(&ISSUE_HEADER, &self.warnings, issue_row);

        format!(
            "{} errors marking orders as paid\n\n{errors}\n\n\n\
             {} successfull marked orders as paid\n\n{successes}\n\n\n\
             {} warnings marking orders as paid\n\n{warnings}",
            self.errors.len(),
            self.successes.len(),
            self.warnings.len(),
        )
    }
}

fn issue_row(outcome: &Outcome) -> [String; 5] {
    [
        outcome.booking_date.to_string(),
        outcome.order_code_or_empty().to_string(),
        outcome.from_account.clone(),
        outcome.remittance.clone(),
        outcome.reason.clone(),
    ]
}

fn success_row(outcome: &Outcome) -> [String; 5] {
    [
        outcome.booking_date.to_string(),
        outcome.order_code_or_empty().to_string(),
        outcome.from_account.clone(),
        outcome.bank_transaction_code.clone(),
        outcome.remittance.clone(),
    ]
}

fn render_section(header: &[&str], rows: &[Outcome], row: fn(&Outcome) -> [String; 5]) -> String {
    let mut writer = WriterBuilder::new().terminator(Terminator::Any(b'\n')).from_writer(Vec::new());

    // A record that fails to serialize is logged and left out.
    if let Err(e) = writer.write_record(header) {
        log::error!("Failed to write report header: {e}");
    }
    for outcome in rows {
        if let Err(e) = writer.write_record(row(outcome)) {
            log::error!("Failed to write report row for {}: {e}", outcome.transaction_id);
        }
    }

    match writer.into_inner() {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            log::error!("Failed to flush report section: {e}");
            String::new()
        },
    }
}
