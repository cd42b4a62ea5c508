// Splitwise CSV export import

use std::io::Read;

use thiserror::Error;
use tracing::debug;

use crate::simplify::{Cents, Transaction};

/// Date, Description, Category, Cost, Currency precede the per-person columns.
const METADATA_COLUMNS: usize = 5;
const CATEGORY_COLUMN: usize = 2;
const PAYMENT_CATEGORY: &str = "Payment";

#[derive(Debug, Error)]
pub enum SplitwiseError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV header has no participant columns")]
    NoParticipants,

    #[error("line {line}: invalid amount '{value}'")]
    InvalidAmount { line: u64, value: String },

    #[error("line {line}: expense has no payer")]
    NoPayer { line: u64 },

    #[error("line {line}: expense has more than one payer")]
    MultiplePayers { line: u64 },
}

/// Turn a Splitwise export into transactions.
///
/// Each expense row carries one balance per participant: the single positive
/// balance marks the payer, and every other participant owes the payer the
/// negation of their balance. Payments, rows without a category (such as the
/// trailing totals row) and rows whose width differs from the header are
/// skipped.
pub fn read_splitwise_csv<R: Read>(input: R) -> Result<Vec<Transaction>, SplitwiseError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.len() <= METADATA_COLUMNS {
        return Err(SplitwiseError::NoParticipants);
    }
    let participants: Vec<&str> = headers.iter().skip(METADATA_COLUMNS).collect();

    let mut transactions = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());

        if record.len() != headers.len() {
            debug!("Skipping line {}: {} columns", line, record.len());
            continue;
        }
        let category = &record[CATEGORY_COLUMN];
        if category.is_empty() || category == PAYMENT_CATEGORY {
            continue;
        }

        let balances = record
            .iter()
            .skip(METADATA_COLUMNS)
            .map(|value| parse_cents(value, line))
            .collect::<Result<Vec<_>, _>>()?;

        let mut payers = balances
            .iter()
            .enumerate()
            .filter(|(_, balance)| **balance > 0)
            .map(|(index, _)| index);
        let payer = payers.next().ok_or(SplitwiseError::NoPayer { line })?;
        if payers.next().is_some() {
            return Err(SplitwiseError::MultiplePayers { line });
        }

        for (person, balance) in balances.iter().enumerate() {
            if person == payer || *balance == 0 {
                continue;
            }
            transactions.push(Transaction::new(
                participants[payer],
                participants[person],
                -balance,
            ));
        }
    }

    debug!("Read {} transactions", transactions.len());
    Ok(transactions)
}

fn parse_cents(value: &str, line: u64) -> Result<Cents, SplitwiseError> {
    let amount: f64 = value.parse().map_err(|_| SplitwiseError::InvalidAmount {
        line,
        value: value.to_string(),
    })?;
    Ok((amount * 100.0).round() as Cents)
}
