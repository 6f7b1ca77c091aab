use std::collections::BTreeMap;

use crate::errors::LedgerError;

use super::transaction::{Transaction, TransactionDraft, TransactionKind};

/// Ordered, append-only collection of transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from already validated transactions, preserving order.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Validates and appends a transaction, returning the updated sequence.
    pub fn add(
        &mut self,
        date: impl Into<String>,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
    ) -> Result<&[Transaction], LedgerError> {
        self.add_draft(TransactionDraft {
            date: date.into(),
            kind: Some(kind),
            category: category.into(),
            amount: Some(amount),
        })
    }

    /// Validates a form draft and appends it. The ledger is untouched on failure.
    pub fn add_draft(&mut self, draft: TransactionDraft) -> Result<&[Transaction], LedgerError> {
        let transaction = draft.validate()?;
        self.transactions.push(transaction);
        Ok(&self.transactions)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Signed sum of all amounts: income adds, expenses subtract.
    pub fn balance(&self) -> f64 {
        self.transactions
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }

    /// Sum of expense amounts per category. Categories without expenses are absent.
    pub fn expense_by_category(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for txn in self.transactions.iter().filter(|txn| txn.is_expense()) {
            *totals.entry(txn.category().to_string()).or_insert(0.0) += txn.amount();
        }
        totals
    }

    /// Drops the most recent transaction; used to undo an add whose save failed.
    pub(crate) fn pop_last(&mut self) -> Option<Transaction> {
        self.transactions.pop()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Field;

    #[test]
    fn add_appends_in_order_and_returns_sequence() {
        let mut ledger = Ledger::new();
        ledger
            .add("2024-01-15", TransactionKind::Income, "Salary", 3000.0)
            .expect("first add");
        let all = ledger
            .add("2024-01-16", TransactionKind::Expense, "Rent", 1200.0)
            .expect("second add");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].category(), "Salary");
        assert_eq!(all[1].category(), "Rent");
    }

    #[test]
    fn rejected_add_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new();
        ledger
            .add("2024-01-15", TransactionKind::Income, "Salary", 3000.0)
            .unwrap();

        let err = ledger
            .add("2024-01-01", TransactionKind::Expense, "Food", 0.0)
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));

        let err = ledger
            .add_draft(TransactionDraft::new().date("2024-01-01").amount(5.0))
            .unwrap_err();
        assert!(matches!(err, LedgerError::MissingField(Field::Kind)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn balance_is_signed_sum() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.balance(), 0.0);
        ledger
            .add("2024-01-15", TransactionKind::Income, "Salary", 3000.0)
            .unwrap();
        ledger
            .add("2024-01-16", TransactionKind::Expense, "Rent", 1200.0)
            .unwrap();
        assert_eq!(ledger.balance(), 1800.0);
    }

    #[test]
    fn expense_totals_skip_income_categories() {
        let mut ledger = Ledger::new();
        ledger
            .add("2024-01-15", TransactionKind::Income, "Salary", 3000.0)
            .unwrap();
        ledger
            .add("2024-01-16", TransactionKind::Expense, "Food", 20.0)
            .unwrap();
        ledger
            .add("2024-01-17", TransactionKind::Expense, "Food", 30.0)
            .unwrap();
        ledger
            .add("2024-01-18", TransactionKind::Expense, "Transport", 7.5)
            .unwrap();

        let totals = ledger.expense_by_category();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Food"], 50.0);
        assert_eq!(totals["Transport"], 7.5);
        assert!(!totals.contains_key("Salary"));
    }

    #[test]
    fn pop_last_removes_newest_entry() {
        let mut ledger = Ledger::new();
        ledger
            .add("2024-01-15", TransactionKind::Income, "Salary", 3000.0)
            .unwrap();
        ledger
            .add("2024-01-16", TransactionKind::Expense, "Rent", 1200.0)
            .unwrap();
        let popped = ledger.pop_last().expect("entry");
        assert_eq!(popped.category(), "Rent");
        assert_eq!(ledger.len(), 1);
    }
}
