use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("version", "Show build metadata", "version", cmd_version),
        CommandDefinition::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_exit),
        CommandDefinition::new("quit", "Exit the shell", "quit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Finance Tracker {}", meta.version));
    output::info(format!("  Build hash : {}", meta.git_hash));
    output::info(format!("  Built at   : {}", meta.timestamp));
    output::info(format!("  Profile    : {}", meta.profile));
    output::info(format!("  Rustc      : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let lowered = name.to_lowercase();
        match context.registry.get(&lowered) {
            Some(command) => {
                output::section(command.name);
                output::info(command.description);
                output::info(format!("Usage: {}", command.usage));
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output::section("Commands");
    let width = context
        .registry
        .iter()
        .map(|command| command.usage.len())
        .max()
        .unwrap_or(0);
    for command in context.registry.iter() {
        output::info(format!(
            "  {:<width$}  {}",
            command.usage, command.description
        ));
    }
    output::hint(data_file_note(context));
    Ok(())
}

/// Where transactions live, and how to point the shell at a file in the working directory.
pub(crate) fn data_file_note(context: &ShellContext) -> String {
    format!(
        "Transactions are stored in {}. Run `config set data-file ./transactions.csv` to use the file in the current directory.",
        context.config.resolve_data_file().display()
    )
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
