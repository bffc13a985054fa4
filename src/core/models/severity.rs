//! Outcome severity levels
//!
//! Determines which section of the run report an outcome lands in.

/// Outcome severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The transaction could not be matched to a payable order
    Error,
    /// Nothing was marked, but the situation is likely harmless
    Warning,
    /// The matching order was marked as paid
    Success,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Success => write!(f, "success"),
        }
    }
}
