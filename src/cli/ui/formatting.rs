//! Text renderings of ledger values for the shell.

use crate::core::CategoryShare;
use crate::ledger::Transaction;

const BAR_WIDTH: usize = 30;

/// `$1200.00`, or `-$1200.00` for negative values. Rounds to cents.
///
/// Values that round to zero print without a sign.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let digits = format!("{:.2}", amount.abs());
    let is_zero = digits.bytes().all(|b| b == b'0' || b == b'.');
    if amount < 0.0 && !is_zero {
        format!("-{symbol}{digits}")
    } else {
        format!("{symbol}{digits}")
    }
}

/// Amount as displayed in the transaction list: expenses carry a leading minus.
pub fn transaction_amount(txn: &Transaction, symbol: &str) -> String {
    format_currency(txn.signed_amount(), symbol)
}

pub fn balance_label(balance: f64, symbol: &str) -> String {
    format!("Current Balance: {}", format_currency(balance, symbol))
}

pub fn percent_label(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Proportional bar for a distribution slice.
pub fn share_bar(percent: f64, plain: bool) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.clamp(usize::from(percent > 0.0), BAR_WIDTH);
    let ch = if plain { '#' } else { '█' };
    ch.to_string().repeat(filled)
}

/// One line per category: label, amount, percentage, bar.
pub fn distribution_lines(shares: &[CategoryShare], symbol: &str, plain: bool) -> Vec<String> {
    let label_width = shares
        .iter()
        .map(|share| share.category.chars().count())
        .max()
        .unwrap_or(0);
    let amounts: Vec<String> = shares
        .iter()
        .map(|share| format_currency(share.amount, symbol))
        .collect();
    let amount_width = amounts.iter().map(|a| a.chars().count()).max().unwrap_or(0);

    shares
        .iter()
        .zip(amounts)
        .map(|(share, amount)| {
            format!(
                "{:<label_width$}  {:>amount_width$}  {:>6}  {}",
                share.category,
                amount,
                percent_label(share.percent),
                share_bar(share.percent, plain),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;

    #[test]
    fn currency_has_two_decimals_and_leading_sign() {
        assert_eq!(format_currency(1800.0, "$"), "$1800.00");
        assert_eq!(format_currency(-1200.5, "$"), "-$1200.50");
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
        assert_eq!(format_currency(0.0, "€"), "€0.00");
        assert_eq!(format_currency(-0.004, "$"), "$0.00");
        assert_eq!(format_currency(-0.006, "$"), "-$0.01");
    }

    #[test]
    fn huge_amounts_stay_finite() {
        let text = format_currency(1e307, "$");
        assert!(text.starts_with("$1"));
        assert!(text.ends_with(".00"));
        assert!(!text.contains("inf"));
        assert!(format_currency(-f64::MAX, "$").starts_with("-$1797"));
    }

    #[test]
    fn expense_rows_are_negative() {
        let txn = Transaction::new("2024-01-16", TransactionKind::Expense, "Rent", 1200.0).unwrap();
        assert_eq!(transaction_amount(&txn, "$"), "-$1200.00");
    }

    #[test]
    fn balance_label_matches_display() {
        assert_eq!(balance_label(1800.0, "$"), "Current Balance: $1800.00");
    }

    #[test]
    fn bars_scale_with_percent() {
        assert_eq!(share_bar(100.0, true).len(), BAR_WIDTH);
        assert_eq!(share_bar(50.0, true).len(), 15);
        assert_eq!(share_bar(0.4, true), "#");
        assert_eq!(share_bar(0.0, true), "");
    }

    #[test]
    fn distribution_lines_align_columns() {
        let shares = vec![
            CategoryShare {
                category: "Rent".into(),
                amount: 1200.0,
                percent: 80.0,
            },
            CategoryShare {
                category: "Food".into(),
                amount: 300.0,
                percent: 20.0,
            },
        ];
        let lines = distribution_lines(&shares, "$", true);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Rent  $1200.00   80.0%  "));
        assert!(lines[1].starts_with("Food   $300.00   20.0%  "));
    }
}
