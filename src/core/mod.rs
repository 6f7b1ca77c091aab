//! Application services layered over the ledger and its record store.

pub mod services;
pub mod tracker;

pub use services::{CategoryShare, LedgerSummary, SummaryService};
pub use tracker::FinanceTracker;
