// Debt graph and expense simplification

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod flow;
pub mod graph;
pub mod simplifier;
pub mod splitwise;

pub use graph::DebtGraph;
pub use simplifier::ExpenseSimplifier;
pub use splitwise::{SplitwiseError, read_splitwise_csv};

/// Money in whole cents.
pub type Cents = i64;

/// `receiver` owes `lender` `cents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub lender: String,
    pub receiver: String,
    pub cents: Cents,
}

impl Transaction {
    pub fn new(lender: impl Into<String>, receiver: impl Into<String>, cents: Cents) -> Self {
        Self {
            lender: lender.into(),
            receiver: receiver.into(),
            cents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimplifyError {
    #[error("unknown user: {0}")]
    UnknownUser(String),
}

/// Render cents as `units.cc`, e.g. `-1234` as `-12.34`.
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(-1234), "-12.34");
    }
}
