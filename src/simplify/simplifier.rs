use tracing::debug;

use crate::simplify::flow::max_flow;
use crate::simplify::graph::{DebtEdge, DebtGraph, DebtLedger};

/// Rewrites a debt graph into one with the same net balances and fewer
/// transactions.
///
/// Each original debt is replaced by the maximum flow its debtor can route
/// to its creditor through the remaining debts, so every simplified
/// transaction connects two users who already had a debt between them.
#[derive(Debug, Clone)]
pub struct ExpenseSimplifier {
    simplified: DebtGraph,
}

impl ExpenseSimplifier {
    pub fn new(graph: &DebtGraph) -> Self {
        let mut residual = graph.ledger.clone();
        residual.clear_credits();

        let mut simplified = graph.clone();
        simplified.clear();

        let mut edges = residual.edges();
        let original = edges.len();
        // Stable ascending sort; popping from the back handles the most
        // promising debts first.
        edges.sort_by_key(|edge| priority(&residual, edge));

        while let Some(edge) = edges.pop() {
            if residual.debt(edge.debtor, edge.creditor) <= 0 {
                continue;
            }
            let flow = max_flow(&mut residual, edge.debtor, edge.creditor);
            residual.erase_edge(edge.debtor, edge.creditor);
            simplified.ledger.add_debt(edge.debtor, edge.creditor, flow);
        }

        debug!(
            "Simplified {} debts into {}",
            original,
            simplified.ledger.edges().len()
        );

        Self { simplified }
    }

    /// The simplified graph. It knows every user of the input graph, so
    /// lookups that worked before still work.
    pub fn minimal_transactions(&self) -> &DebtGraph {
        &self.simplified
    }

    pub fn into_graph(self) -> DebtGraph {
        self.simplified
    }
}

/// Debts between a creditor who is owed overall and a debtor who owes
/// overall rank first, then wider net-balance gaps, then larger amounts.
fn priority(ledger: &DebtLedger, edge: &DebtEdge) -> (u8, i64, i64) {
    let creditor_total = ledger.total_debt(edge.creditor);
    let debtor_total = ledger.total_debt(edge.debtor);
    let score = u8::from(creditor_total < 0) + u8::from(debtor_total > 0);
    (score, (creditor_total - debtor_total).abs(), edge.amount)
}
