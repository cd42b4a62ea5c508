use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use tracing::info;

use crate::cli::SimplifyArgs;
use crate::simplify::{DebtGraph, ExpenseSimplifier, Transaction, format_cents, read_splitwise_csv};

/// Read a Splitwise export and print who pays whom
pub fn handle_simplify(args: &SimplifyArgs) -> Result<()> {
    for line in settle_file(&args.input_csv)? {
        println!("{}", line);
    }
    Ok(())
}

/// One `<receiver> pays <lender> <amount>` line per simplified transaction
pub fn settle_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let transactions = read_splitwise_csv(file)
        .with_context(|| format!("Failed to import {}", path.display()))?;

    let graph = DebtGraph::from_transactions(&transactions);
    let simplified = ExpenseSimplifier::new(&graph).into_graph().transactions();

    info!(
        "Settling {} users: {} debts reduced to {}",
        graph.num_users(),
        graph.transactions().len(),
        simplified.len()
    );

    Ok(simplified.iter().map(describe).collect())
}

fn describe(transaction: &Transaction) -> String {
    format!(
        "{} pays {} {}",
        transaction.receiver,
        transaction.lender,
        format_cents(transaction.cents)
    )
}
