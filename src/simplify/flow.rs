use std::collections::VecDeque;

use crate::simplify::Cents;
use crate::simplify::graph::DebtLedger;

/// Push as much debt as possible from `source` to `sink`, treating each
/// positive `debt(u, v)` as capacity on `u -> v`. Flow is applied to the
/// ledger in place and the total pushed is returned.
///
/// Blocking-flow search over BFS level graphs; nodes that cannot reach the
/// sink in the current level graph are pruned until the next phase.
pub(crate) fn max_flow(ledger: &mut DebtLedger, source: usize, sink: usize) -> Cents {
    if source == sink {
        return 0;
    }

    let mut total = 0;
    while let Some(levels) = level_graph(ledger, source, sink) {
        let mut dead = vec![false; ledger.num_users()];
        loop {
            let pushed = augment(ledger, &levels, &mut dead, source, sink, Cents::MAX);
            if pushed == 0 {
                break;
            }
            total += pushed;
        }
    }
    total
}

/// BFS distance from `source` over edges with remaining capacity, or `None`
/// once the sink is unreachable.
fn level_graph(ledger: &DebtLedger, source: usize, sink: usize) -> Option<Vec<Option<usize>>> {
    let mut levels = vec![None; ledger.num_users()];
    levels[source] = Some(0);

    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        let next_level = levels[node].map(|level| level + 1);
        for (next, _) in ledger.creditors(node) {
            if levels[next].is_none() {
                levels[next] = next_level;
                queue.push_back(next);
            }
        }
    }

    levels[sink].map(|_| levels)
}

fn augment(
    ledger: &mut DebtLedger,
    levels: &[Option<usize>],
    dead: &mut [bool],
    node: usize,
    sink: usize,
    limit: Cents,
) -> Cents {
    if node == sink {
        return limit;
    }

    let next_level = levels[node].map(|level| level + 1);
    let candidates: Vec<usize> = ledger
        .creditors(node)
        .filter(|(next, _)| levels[*next] == next_level && !dead[*next])
        .map(|(next, _)| next)
        .collect();

    for next in candidates {
        let capacity = ledger.debt(node, next);
        if capacity <= 0 {
            continue;
        }
        let pushed = augment(ledger, levels, dead, next, sink, limit.min(capacity));
        if pushed > 0 {
            // Moving flow along node -> next pays that debt down and opens
            // the reverse residual edge.
            ledger.add_debt(next, node, pushed);
            return pushed;
        }
    }

    dead[node] = true;
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(users: usize, debts: &[(usize, usize, Cents)]) -> DebtLedger {
        let mut ledger = DebtLedger::default();
        for _ in 0..users {
            ledger.add_user();
        }
        for (debtor, creditor, amount) in debts {
            ledger.add_debt(*debtor, *creditor, *amount);
        }
        ledger.clear_credits();
        ledger
    }

    #[test]
    fn test_direct_edge_is_saturated() {
        let mut ledger = ledger(2, &[(0, 1, 100)]);

        assert_eq!(max_flow(&mut ledger, 0, 1), 100);
        assert_eq!(ledger.debt(0, 1), 0);
        assert_eq!(ledger.debt(1, 0), 100);
    }

    #[test]
    fn test_flow_is_bounded_by_bottleneck() {
        let mut ledger = ledger(3, &[(0, 1, 100), (1, 2, 30)]);

        assert_eq!(max_flow(&mut ledger, 0, 2), 30);
        assert_eq!(ledger.debt(0, 1), 70);
    }

    #[test]
    fn test_parallel_paths_add_up() {
        let mut ledger = ledger(4, &[(0, 1, 5), (1, 3, 5), (0, 2, 7), (2, 3, 4), (0, 3, 1)]);

        assert_eq!(max_flow(&mut ledger, 0, 3), 10);
    }

    #[test]
    fn test_unreachable_sink_pushes_nothing() {
        let mut ledger = ledger(3, &[(1, 0, 100)]);

        assert_eq!(max_flow(&mut ledger, 0, 2), 0);
        assert_eq!(max_flow(&mut ledger, 0, 0), 0);
    }
}
