use chrono::Local;

use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::ui::formatting::{balance_label, format_currency, transaction_amount};
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::ledger::{TransactionDraft, TransactionKind, SUGGESTED_CATEGORIES};

const ADD_USAGE: &str = "add <income|expense> <amount> <category> [date]";
const OTHER_CATEGORY: &str = "Other...";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("add", "Record a transaction", ADD_USAGE, cmd_add),
        CommandDefinition::new("list", "List all transactions", "list", cmd_list),
    ]
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = if args.is_empty() {
        if context.mode() != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}")));
        }
        match prompt_draft(context)? {
            Some(draft) => draft,
            None => {
                output::info("Add cancelled.");
                return Ok(());
            }
        }
    } else {
        draft_from_args(args)?
    };
    record(context, draft)
}

/// Builds a draft from `kind amount category [date]`.
///
/// Blank values are left empty so validation reports them as missing. The
/// category is kept as typed.
pub(crate) fn draft_from_args(args: &[&str]) -> Result<TransactionDraft, CommandError> {
    if args.len() < 3 || args.len() > 4 {
        return Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}")));
    }
    let kind = parse_kind(args[0])?;
    let amount = parse_amount(args[1])?;
    let date = args.get(3).map(|d| d.to_string()).unwrap_or_else(today);
    Ok(TransactionDraft {
        date,
        kind,
        category: args[2].to_string(),
        amount,
    })
}

fn parse_kind(raw: &str) -> Result<Option<TransactionKind>, CommandError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.parse::<TransactionKind>()
        .map(Some)
        .map_err(CommandError::InvalidArguments)
}

fn parse_amount(raw: &str) -> Result<Option<f64>, CommandError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| CommandError::InvalidArguments(format!("`{trimmed}` is not a number")))
}

fn prompt_draft(context: &ShellContext) -> Result<Option<TransactionDraft>, CommandError> {
    let kinds: Vec<&str> = TransactionKind::ALL.iter().map(|kind| kind.as_str()).collect();
    let Some(kind_idx) = io::prompt_select(&context.theme, "Type", &kinds)? else {
        return Ok(None);
    };

    let amount = io::prompt_text(&context.theme, "Amount", None)?;
    let amount = parse_amount(&amount)?;

    let mut choices: Vec<&str> = SUGGESTED_CATEGORIES.to_vec();
    choices.push(OTHER_CATEGORY);
    let Some(category_idx) = io::prompt_select(&context.theme, "Category", &choices)? else {
        return Ok(None);
    };
    let category = if choices[category_idx] == OTHER_CATEGORY {
        io::prompt_text(
            &context.theme,
            "Category name",
            context.config.default_category.as_deref(),
        )?
    } else {
        choices[category_idx].to_string()
    };

    let date = io::prompt_text(&context.theme, "Date", Some(today().as_str()))?;

    Ok(Some(TransactionDraft {
        date,
        kind: Some(TransactionKind::ALL[kind_idx]),
        category,
        amount,
    }))
}

fn record(context: &mut ShellContext, draft: TransactionDraft) -> CommandResult {
    let symbol = context.currency().to_string();
    let added = context.tracker.add(draft)?;
    let message = format!(
        "Added {} of {} ({}) on {}",
        added.kind().as_str().to_lowercase(),
        format_currency(added.amount(), &symbol),
        added.category(),
        added.date()
    );
    output::success(message);
    output::highlight(balance_label(context.tracker.balance(), &symbol));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let transactions = context.tracker.transactions();
    if transactions.is_empty() {
        output::info("No transactions recorded.");
        return Ok(());
    }

    let symbol = context.currency();
    let mut table = Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Type"),
        TableColumn::left("Category"),
        TableColumn::right("Amount"),
    ]);
    for txn in transactions {
        table.push_row(vec![
            txn.date().to_string(),
            txn.kind().to_string(),
            txn.category().to_string(),
            transaction_amount(txn, symbol),
        ]);
    }
    output::block(&table.render());
    Ok(())
}
