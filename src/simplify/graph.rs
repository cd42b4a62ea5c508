use std::collections::{BTreeMap, HashMap};

use crate::simplify::{Cents, SimplifyError, Transaction};

/// Debts between users identified by dense ids.
///
/// `debts[a][b]` is what `a` owes `b`; every entry is mirrored by its
/// negation in `debts[b][a]` until [`clear_credits`](Self::clear_credits)
/// drops the non-positive side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DebtLedger {
    debts: Vec<BTreeMap<usize, Cents>>,
    totals: Vec<Cents>,
}

/// One directed debt: `debtor` owes `creditor` `amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DebtEdge {
    pub debtor: usize,
    pub creditor: usize,
    pub amount: Cents,
}

impl DebtLedger {
    pub fn num_users(&self) -> usize {
        self.debts.len()
    }

    pub fn add_user(&mut self) -> usize {
        self.debts.push(BTreeMap::new());
        self.totals.push(0);
        self.debts.len() - 1
    }

    pub fn debt(&self, debtor: usize, creditor: usize) -> Cents {
        self.debts[debtor].get(&creditor).copied().unwrap_or(0)
    }

    pub fn total_debt(&self, user: usize) -> Cents {
        self.totals[user]
    }

    /// Record that `debtor` owes `creditor` `amount` more. A negative amount
    /// pays debt down, which is how flow is pushed through the graph.
    pub fn add_debt(&mut self, debtor: usize, creditor: usize, amount: Cents) {
        *self.debts[debtor].entry(creditor).or_insert(0) += amount;
        *self.debts[creditor].entry(debtor).or_insert(0) -= amount;
        self.totals[debtor] += amount;
        self.totals[creditor] -= amount;
    }

    /// Drop every debt between the two users in both directions.
    pub fn erase_edge(&mut self, a: usize, b: usize) {
        if let Some(amount) = self.debts[a].remove(&b) {
            self.totals[a] -= amount;
        }
        if let Some(amount) = self.debts[b].remove(&a) {
            self.totals[b] -= amount;
        }
    }

    /// Remove non-positive entries, leaving only capacities. Totals keep
    /// their net values.
    pub fn clear_credits(&mut self) {
        for debts in &mut self.debts {
            debts.retain(|_, amount| *amount > 0);
        }
    }

    /// Forget all debts but keep the users.
    pub fn clear(&mut self) {
        for debts in &mut self.debts {
            debts.clear();
        }
        self.totals.iter_mut().for_each(|total| *total = 0);
    }

    /// Creditors `user` owes a positive amount to.
    pub fn creditors(&self, user: usize) -> impl Iterator<Item = (usize, Cents)> + '_ {
        self.debts[user]
            .iter()
            .filter(|(_, amount)| **amount > 0)
            .map(|(creditor, amount)| (*creditor, *amount))
    }

    /// Every positive debt, ordered by debtor then creditor id.
    pub fn edges(&self) -> Vec<DebtEdge> {
        (0..self.num_users())
            .flat_map(|debtor| {
                self.creditors(debtor).map(move |(creditor, amount)| DebtEdge {
                    debtor,
                    creditor,
                    amount,
                })
            })
            .collect()
    }
}

/// Debts between named users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebtGraph {
    pub(crate) ledger: DebtLedger,
    ids: HashMap<String, usize>,
    names: Vec<String>,
}

impl DebtGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut graph = Self::new();
        for transaction in transactions {
            graph.add_transaction(transaction);
        }
        graph
    }

    pub fn num_users(&self) -> usize {
        self.names.len()
    }

    /// `receiver` now owes `lender` `cents` more. Users are created on first sight.
    pub fn add_transaction(&mut self, transaction: &Transaction) {
        let lender = self.find_or_assign_user_id(&transaction.lender);
        let receiver = self.find_or_assign_user_id(&transaction.receiver);
        self.ledger.add_debt(receiver, lender, transaction.cents);
    }

    pub fn find_user_id(&self, username: &str) -> Result<usize, SimplifyError> {
        self.ids
            .get(username)
            .copied()
            .ok_or_else(|| SimplifyError::UnknownUser(username.to_string()))
    }

    /// What `receiver` owes `lender`; negative when `lender` owes `receiver`.
    pub fn amount_owed(&self, lender: &str, receiver: &str) -> Result<Cents, SimplifyError> {
        let lender = self.find_user_id(lender)?;
        let receiver = self.find_user_id(receiver)?;
        Ok(self.ledger.debt(receiver, lender))
    }

    /// Net amount `user` owes everyone; negative when they are owed money.
    pub fn total_debt(&self, user: &str) -> Result<Cents, SimplifyError> {
        Ok(self.ledger.total_debt(self.find_user_id(user)?))
    }

    /// Every outstanding debt as a transaction, ordered by receiver then lender.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.ledger
            .edges()
            .into_iter()
            .map(|edge| Transaction {
                lender: self.names[edge.creditor].clone(),
                receiver: self.names[edge.debtor].clone(),
                cents: edge.amount,
            })
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.ledger.clear();
    }

    fn find_or_assign_user_id(&mut self, username: &str) -> usize {
        if let Some(id) = self.ids.get(username) {
            return *id;
        }
        let id = self.ledger.add_user();
        self.ids.insert(username.to_string(), id);
        self.names.push(username.to_string());
        id
    }
}
