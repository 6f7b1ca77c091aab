use std::path::PathBuf;

use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;

const CONFIG_USAGE: &str =
    "config [show|set <currency|color|default-category|data-file> <value>]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "config",
        "View and change preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: {CONFIG_USAGE}"
                )));
            }
            let value = args[2..].join(" ");
            set_config_value(context, args[1], value.trim())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`; usage: {CONFIG_USAGE}"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    output::section("Configuration");
    output::info(format!("  currency         : {}", config.currency_symbol));
    output::info(format!(
        "  color            : {}",
        if config.ui_color_enabled { "on" } else { "off" }
    ));
    output::info(format!(
        "  default-category : {}",
        config.default_category.as_deref().unwrap_or("(none)")
    ));
    output::info(format!(
        "  data-file        : {}",
        config.resolve_data_file().display()
    ));
    output::info(format!(
        "  stored in        : {}",
        context.config_manager.config_path().display()
    ));
}

/// `none` clears optional values.
fn optional(value: &str) -> Option<String> {
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(value.to_string())
    }
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut config = context.config.clone();
    match key.to_lowercase().as_str() {
        "currency" => {
            if value.is_empty() {
                return Err(CommandError::InvalidArguments(
                    "currency symbol cannot be empty".into(),
                ));
            }
            config.currency_symbol = value.to_string();
        }
        "color" => {
            config.ui_color_enabled = match value.to_lowercase().as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "expected on or off, got `{other}`"
                    )))
                }
            };
        }
        "default-category" => config.default_category = optional(value),
        "data-file" => config.data_file = optional(value).map(PathBuf::from),
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown config key `{other}`"
            )))
        }
    }

    let data_file_changed = config.data_file != context.config.data_file;
    context.update_config(config)?;
    output::success(format!("Updated `{key}`."));
    if data_file_changed {
        output::hint("The new data file is used from the next start.");
    }
    Ok(())
}
