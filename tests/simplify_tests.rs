use debtsimpl::commands::simplify::settle_file;
use debtsimpl::simplify::{DebtGraph, ExpenseSimplifier, read_splitwise_csv};
use std::io::Write;

// Three friends who each paid for one shared thing
const TRIP: &str = "\
Date,Description,Category,Cost,Currency,Ana,Ben,Cleo
2024-05-01,Hotel,Lodging,90.00,USD,60.00,-30.00,-30.00
2024-05-02,Dinner,Food,60.00,USD,-20.00,40.00,-20.00
2024-05-03,Fuel,Transportation,30.00,USD,-10.00,-10.00,20.00
2024-05-04,Ben paid Ana,Payment,10.00,USD,-10.00,10.00,0.00
";

#[test]
fn test_import_then_simplify_keeps_balances() {
    let transactions = read_splitwise_csv(TRIP.as_bytes()).unwrap();
    assert_eq!(transactions.len(), 6);

    let graph = DebtGraph::from_transactions(&transactions);
    let simplified = ExpenseSimplifier::new(&graph);
    let minimal = simplified.minimal_transactions();

    for user in ["Ana", "Ben", "Cleo"] {
        assert_eq!(
            minimal.total_debt(user).unwrap(),
            graph.total_debt(user).unwrap(),
            "net balance of {user}"
        );
    }
    assert!(minimal.transactions().len() < graph.transactions().len());
}

#[test]
fn test_settle_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TRIP.as_bytes()).unwrap();

    let lines = settle_file(file.path()).unwrap();

    assert!(!lines.is_empty());
    assert!(lines.iter().all(|line| line.contains(" pays ")));
}

#[test]
fn test_settle_file_rejects_multiple_payers() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        b"Date,Description,Category,Cost,Currency,Ana,Ben\n\
          2024-05-01,Lunch,Food,10.00,USD,5.00,5.00\n",
    )
    .unwrap();

    let err = settle_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("more than one payer"));
}
