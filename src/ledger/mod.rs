//! Ledger domain models: transactions, validation, and derived views.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use category::SUGGESTED_CATEGORIES;
pub use ledger::Ledger;
pub use transaction::{Field, Transaction, TransactionDraft, TransactionKind};
