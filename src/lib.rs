#![doc(test(attr(deny(warnings))))]

//! Finance Tracker records income and expense transactions, derives the running
//! balance and per-category expense totals, and persists everything to a CSV file.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

pub use crate::core::FinanceTracker;
pub use errors::LedgerError;
pub use ledger::{Ledger, Transaction, TransactionDraft, TransactionKind};
pub use storage::{CsvRecordStore, RecordStore};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Tracker tracing initialized.");
    });
}
