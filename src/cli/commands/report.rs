use std::collections::BTreeSet;

use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::ui::formatting::{balance_label, distribution_lines, format_currency};
use crate::core::SummaryService;
use crate::ledger::category::is_suggested;
use crate::ledger::SUGGESTED_CATEGORIES;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("balance", "Show the current balance", "balance", cmd_balance),
        CommandDefinition::new(
            "summary",
            "Show income, expense and balance totals",
            "summary",
            cmd_summary,
        ),
        CommandDefinition::new(
            "chart",
            "Show expense distribution by category",
            "chart",
            cmd_chart,
        ),
        CommandDefinition::new(
            "categories",
            "List suggested and used categories",
            "categories",
            cmd_categories,
        ),
    ]
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::highlight(balance_label(context.tracker.balance(), context.currency()));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = SummaryService::summarize(context.tracker.ledger());
    let symbol = context.currency();
    output::section("Summary");
    output::info(format!(
        "  Income       : {}",
        format_currency(summary.total_income, symbol)
    ));
    output::info(format!(
        "  Expenses     : {}",
        format_currency(summary.total_expenses, symbol)
    ));
    output::info(format!(
        "  Balance      : {}",
        format_currency(summary.balance, symbol)
    ));
    output::info(format!("  Transactions : {}", summary.transaction_count));
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let shares = SummaryService::expense_distribution(context.tracker.ledger());
    if shares.is_empty() {
        output::info("No expenses to chart.");
        return Ok(());
    }
    let plain = output::current_preferences().plain_mode;
    output::section("Expense Distribution by Category");
    output::block(&distribution_lines(&shares, context.currency(), plain).join("\n"));
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Suggested categories");
    for label in SUGGESTED_CATEGORIES {
        output::info(format!("  {label}"));
    }

    let custom: BTreeSet<&str> = context
        .tracker
        .transactions()
        .iter()
        .map(|txn| txn.category())
        .filter(|label| !is_suggested(label))
        .collect();
    if !custom.is_empty() {
        output::section("Other categories in use");
        for label in custom {
            output::info(format!("  {label}"));
        }
    }
    Ok(())
}
