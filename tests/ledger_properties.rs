use finance_tracker::{
    ledger::{Field, Ledger, TransactionDraft, TransactionKind},
    LedgerError,
};

#[test]
fn empty_ledger_has_zero_balance_and_no_expenses() {
    let ledger = Ledger::new();
    assert_eq!(ledger.balance(), 0.0);
    assert!(ledger.expense_by_category().is_empty());
}

#[test]
fn income_minus_expense_gives_balance() {
    let mut ledger = Ledger::new();
    ledger
        .add("2024-01-15", TransactionKind::Income, "Salary", 3000.0)
        .unwrap();
    ledger
        .add("2024-01-16", TransactionKind::Expense, "Rent", 1200.0)
        .unwrap();
    assert_eq!(ledger.balance(), 1800.0);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn expenses_in_one_category_are_summed() {
    let mut ledger = Ledger::new();
    ledger
        .add("2024-02-01", TransactionKind::Expense, "Food", 20.0)
        .unwrap();
    ledger
        .add("2024-02-02", TransactionKind::Expense, "Food", 30.0)
        .unwrap();
    ledger
        .add("2024-02-03", TransactionKind::Income, "Food", 500.0)
        .unwrap();
    let totals = ledger.expense_by_category();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals["Food"], 50.0);
}

#[test]
fn zero_amount_is_rejected_and_ledger_unchanged() {
    let mut ledger = Ledger::new();
    let err = ledger
        .add("2024-01-01", TransactionKind::Expense, "Food", 0.0)
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(amount) if amount == 0.0));
    assert!(ledger.is_empty());
}

#[test]
fn negative_and_non_finite_amounts_are_rejected() {
    let mut ledger = Ledger::new();
    for amount in [-5.0, f64::NAN, f64::INFINITY] {
        let err = ledger
            .add("2024-01-01", TransactionKind::Income, "Salary", amount)
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }
    assert!(ledger.is_empty());
}

#[test]
fn each_missing_field_is_reported() {
    let complete = TransactionDraft::new()
        .date("2024-03-01")
        .kind(TransactionKind::Expense)
        .category("Transport")
        .amount(15.0);

    let cases = [
        (
            TransactionDraft {
                date: "  ".into(),
                ..complete.clone()
            },
            Field::Date,
        ),
        (
            TransactionDraft {
                kind: None,
                ..complete.clone()
            },
            Field::Kind,
        ),
        (
            TransactionDraft {
                category: String::new(),
                ..complete.clone()
            },
            Field::Category,
        ),
        (
            TransactionDraft {
                amount: None,
                ..complete.clone()
            },
            Field::Amount,
        ),
    ];

    let mut ledger = Ledger::new();
    for (draft, field) in cases {
        let err = ledger.add_draft(draft).unwrap_err();
        assert!(
            matches!(err, LedgerError::MissingField(missing) if missing == field),
            "expected missing {field}, got {err:?}"
        );
    }
    assert!(ledger.is_empty());

    ledger.add_draft(complete).unwrap();
    assert_eq!(ledger.len(), 1);
}

#[test]
fn missing_field_wins_over_bad_amount() {
    let mut ledger = Ledger::new();
    let draft = TransactionDraft::new()
        .date("2024-03-01")
        .kind(TransactionKind::Expense)
        .amount(0.0);
    assert!(matches!(
        ledger.add_draft(draft),
        Err(LedgerError::MissingField(Field::Category))
    ));
}

#[test]
fn balance_does_not_depend_on_insertion_order() {
    let entries = [
        (TransactionKind::Income, "Salary", 2500.0),
        (TransactionKind::Expense, "Rent", 950.0),
        (TransactionKind::Expense, "Food", 120.25),
        (TransactionKind::Income, "Salary", 75.5),
        (TransactionKind::Expense, "Utilities", 60.0),
    ];

    let mut forward = Ledger::new();
    for (kind, category, amount) in entries {
        forward.add("2024-04-01", kind, category, amount).unwrap();
    }
    let mut backward = Ledger::new();
    for (kind, category, amount) in entries.iter().rev() {
        backward
            .add("2024-04-01", *kind, *category, *amount)
            .unwrap();
    }

    let expected = 2500.0 - 950.0 - 120.25 + 75.5 - 60.0;
    assert!((forward.balance() - expected).abs() < 1e-9);
    assert!((backward.balance() - expected).abs() < 1e-9);
    assert_eq!(forward.expense_by_category(), backward.expense_by_category());
}

#[test]
fn add_preserves_insertion_order() {
    let mut ledger = Ledger::new();
    let count = ledger
        .add("2024-05-02", TransactionKind::Expense, "Rent", 800.0)
        .unwrap()
        .len();
    assert_eq!(count, 1);
    ledger
        .add("2024-05-01", TransactionKind::Income, "Salary", 2000.0)
        .unwrap();
    let dates: Vec<_> = ledger.iter().map(|txn| txn.date()).collect();
    assert_eq!(dates, vec!["2024-05-02", "2024-05-01"]);
}
