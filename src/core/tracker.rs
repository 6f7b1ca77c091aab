use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::errors::LedgerError;
use crate::ledger::{Ledger, Transaction, TransactionDraft, TransactionKind};
use crate::storage::RecordStore;

/// Facade that keeps the in-memory ledger and its record store in step.
///
/// Every successful add is persisted before control returns. When the save
/// fails the add is undone, so memory never holds a transaction the store
/// does not.
pub struct FinanceTracker {
    ledger: Ledger,
    store: Box<dyn RecordStore>,
}

impl FinanceTracker {
    /// Loads the persisted transactions from `store` into a fresh ledger.
    pub fn open(store: Box<dyn RecordStore>) -> Result<Self, LedgerError> {
        let transactions = store.load()?;
        info!(records = transactions.len(), "ledger opened");
        Ok(Self {
            ledger: Ledger::from_transactions(transactions),
            store,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    pub fn expense_by_category(&self) -> BTreeMap<String, f64> {
        self.ledger.expense_by_category()
    }

    /// Validates, appends, and persists a transaction.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<&Transaction, LedgerError> {
        self.ledger.add_draft(draft)?;
        if let Err(err) = self.store.save(self.ledger.transactions()) {
            let undone = self.ledger.pop_last();
            warn!(
                error = %err,
                rolled_back = undone.is_some(),
                "save failed; transaction not recorded"
            );
            return Err(err);
        }
        // Non-empty: the append above succeeded and was not rolled back.
        let added = &self.ledger.transactions()[self.ledger.len() - 1];
        debug!(
            date = added.date(),
            kind = %added.kind(),
            category = added.category(),
            amount = added.amount(),
            "transaction recorded"
        );
        Ok(added)
    }

    pub fn add_transaction(
        &mut self,
        date: impl Into<String>,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
    ) -> Result<&Transaction, LedgerError> {
        self.add(TransactionDraft {
            date: date.into(),
            kind: Some(kind),
            category: category.into(),
            amount: Some(amount),
        })
    }

    /// Replaces the in-memory ledger with the store's content.
    ///
    /// On failure the current ledger is kept.
    pub fn reload(&mut self) -> Result<(), LedgerError> {
        let transactions = self.store.load()?;
        self.ledger = Ledger::from_transactions(transactions);
        Ok(())
    }
}
