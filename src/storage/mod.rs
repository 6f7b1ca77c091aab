pub mod csv_backend;

use crate::{errors::LedgerError, ledger::Transaction};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over durable stores holding the transaction list.
pub trait RecordStore {
    /// Reads every persisted transaction in on-disk order. A missing store reads as empty.
    fn load(&self) -> Result<Vec<Transaction>>;

    /// Replaces the persisted content with `transactions`.
    fn save(&self, transactions: &[Transaction]) -> Result<()>;
}

pub use csv_backend::{CsvRecordStore, CSV_HEADER};
