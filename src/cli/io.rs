use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::core::CommandError;

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, dialoguer::Error> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
}

/// Prompt for free-form text; an empty answer is allowed and returned as-is.
pub fn prompt_text(
    theme: &ColorfulTheme,
    prompt: &str,
    default: Option<&str>,
) -> Result<String, CommandError> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(value) = default {
        input = input.default(value.to_string());
    }
    input.interact_text().map_err(CommandError::from)
}

/// Single choice from `items`. `None` when the user cancels.
pub fn prompt_select(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[&str],
) -> Result<Option<usize>, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(CommandError::from)
}
