use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::errors::LedgerError;

/// Direction of money flow for a transaction.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    /// Applies the sign used for balance computation.
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(format!("unknown transaction kind `{other}`")),
        }
    }
}

/// Required inputs of a transaction, used to report which one is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Kind,
    Category,
    Amount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Date => "date",
            Field::Kind => "kind",
            Field::Category => "category",
            Field::Amount => "amount",
        };
        f.write_str(label)
    }
}

/// A single income or expense entry. Immutable once validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    date: String,
    kind: TransactionKind,
    category: String,
    amount: f64,
}

impl Transaction {
    /// Validates the provided values and builds a transaction.
    pub fn new(
        date: impl Into<String>,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
    ) -> Result<Self, LedgerError> {
        TransactionDraft {
            date: date.into(),
            kind: Some(kind),
            category: category.into(),
            amount: Some(amount),
        }
        .validate()
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the sign applied: positive for income, negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }
}

/// Loosely-typed form input awaiting validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    pub date: String,
    pub kind: Option<TransactionKind>,
    pub category: String,
    pub amount: Option<f64>,
}

impl TransactionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Converts the draft into a transaction, reporting the first failing check.
    ///
    /// Presence is checked for every field before the amount's sign, so a draft
    /// missing its category and carrying a zero amount reports `MissingField`.
    pub fn validate(self) -> Result<Transaction, LedgerError> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err(LedgerError::MissingField(Field::Date));
        }
        let kind = self.kind.ok_or(LedgerError::MissingField(Field::Kind))?;
        let category = self.category.trim();
        if category.is_empty() {
            return Err(LedgerError::MissingField(Field::Category));
        }
        let amount = self.amount.ok_or(LedgerError::MissingField(Field::Amount))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        Ok(Transaction {
            date: date.to_string(),
            kind,
            category: category.to_string(),
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> TransactionDraft {
        TransactionDraft::new()
            .date("2024-01-15")
            .kind(TransactionKind::Income)
            .category("Salary")
            .amount(3000.0)
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!(" EXPENSE ".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn draft_validates_into_trimmed_transaction() {
        let txn = full_draft()
            .date(" 2024-01-15 ")
            .category("  Salary")
            .validate()
            .expect("valid draft");
        assert_eq!(txn.date(), "2024-01-15");
        assert_eq!(txn.category(), "Salary");
        assert_eq!(txn.kind(), TransactionKind::Income);
        assert_eq!(txn.amount(), 3000.0);
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let err = TransactionDraft::new().validate().unwrap_err();
        assert!(matches!(err, LedgerError::MissingField(Field::Date)));

        let mut draft = full_draft();
        draft.kind = None;
        assert!(matches!(
            draft.validate(),
            Err(LedgerError::MissingField(Field::Kind))
        ));

        let err = full_draft().category("   ").validate().unwrap_err();
        assert!(matches!(err, LedgerError::MissingField(Field::Category)));

        let mut draft = full_draft();
        draft.amount = None;
        assert!(matches!(
            draft.validate(),
            Err(LedgerError::MissingField(Field::Amount))
        ));
    }

    #[test]
    fn missing_field_wins_over_invalid_amount() {
        let err = full_draft().category("").amount(0.0).validate().unwrap_err();
        assert!(matches!(err, LedgerError::MissingField(Field::Category)));
    }

    #[test]
    fn non_positive_and_non_finite_amounts_are_rejected() {
        for amount in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = full_draft().amount(amount).validate().unwrap_err();
            assert!(
                matches!(err, LedgerError::InvalidAmount(_)),
                "amount {amount} should be invalid, got {err:?}"
            );
        }
    }

    #[test]
    fn signed_amount_follows_kind() {
        let income = Transaction::new("2024-01-01", TransactionKind::Income, "Salary", 10.0)
            .expect("income");
        let expense = Transaction::new("2024-01-01", TransactionKind::Expense, "Food", 4.5)
            .expect("expense");
        assert_eq!(income.signed_amount(), 10.0);
        assert_eq!(expense.signed_amount(), -4.5);
        assert!(expense.is_expense());
    }
}
