use crate::ledger::{Ledger, TransactionKind};

/// Aggregate figures shown next to the transaction list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub transaction_count: usize,
}

/// One slice of the expense distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Percentage of total expenses, in the 0..=100 range.
    pub percent: f64,
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(ledger: &Ledger) -> LedgerSummary {
        let mut total_income = 0.0;
        let mut total_expenses = 0.0;
        for txn in ledger {
            match txn.kind() {
                TransactionKind::Income => total_income += txn.amount(),
                TransactionKind::Expense => total_expenses += txn.amount(),
            }
        }
        LedgerSummary {
            total_income,
            total_expenses,
            balance: ledger.balance(),
            transaction_count: ledger.len(),
        }
    }

    /// Expense totals per category with their share of all expenses, largest first.
    ///
    /// Empty when the ledger has no expenses; callers treat that as nothing to chart.
    pub fn expense_distribution(ledger: &Ledger) -> Vec<CategoryShare> {
        let totals = ledger.expense_by_category();
        let grand_total: f64 = totals.values().sum();
        if grand_total <= 0.0 {
            return Vec::new();
        }
        let mut shares: Vec<CategoryShare> = totals
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                percent: amount / grand_total * 100.0,
                category,
                amount,
            })
            .collect();
        shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        shares
    }
}
