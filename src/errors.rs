use thiserror::Error;

use crate::ledger::Field;

/// Error type that captures ledger validation and persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("All fields are required: missing {0}")]
    MissingField(Field),
    #[error("Amount must be positive (got {0})")]
    InvalidAmount(f64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed record {record}: {message}")]
    Decode { record: usize, message: String },
}

impl LedgerError {
    pub(crate) fn decode(record: usize, message: impl Into<String>) -> Self {
        LedgerError::Decode {
            record,
            message: message.into(),
        }
    }

    /// Returns true for failures the user can fix by correcting their input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::MissingField(_) | LedgerError::InvalidAmount(_)
        )
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        let record = err
            .position()
            .map(|pos| pos.line().saturating_sub(1) as usize)
            .unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => LedgerError::Io(io),
            _ => LedgerError::decode(record, message),
        }
    }
}
