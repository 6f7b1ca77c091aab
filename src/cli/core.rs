//! Shell context, dispatch, and CLI error types.

use std::io;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;
use tracing::info;

use crate::{
    config::{Config, ConfigError, ConfigManager},
    core::FinanceTracker,
    errors::LedgerError,
    storage::CsvRecordStore,
};

use super::commands::{self, CommandRegistry};
use super::output::{self, OutputPreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failures that abort the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

/// Failures of a single command; reported and the shell continues.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Everything a command handler can reach: the tracker, preferences, and mode.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) tracker: FinanceTracker,
    pub(crate) config: Config,
    pub(crate) config_manager: ConfigManager,
    pub(crate) theme: ColorfulTheme,
    pub(crate) running: bool,
}

impl ShellContext {
    /// Loads configuration and the transaction file from their default locations.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_default_location()?;
        let config = config_manager.load()?;
        let data_file = config.resolve_data_file();
        info!(path = %data_file.display(), "opening transaction file");
        let tracker = FinanceTracker::open(Box::new(CsvRecordStore::new(data_file)))?;
        Ok(Self::with_parts(mode, tracker, config_manager, config))
    }

    pub fn with_parts(
        mode: CliMode,
        tracker: FinanceTracker,
        config_manager: ConfigManager,
        config: Config,
    ) -> Self {
        apply_output_preferences(&config);
        Self {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            tracker,
            config,
            config_manager,
            theme: ColorfulTheme::default(),
            running: true,
        }
    }

    /// Persists `config` and makes it the active configuration.
    pub(crate) fn update_config(&mut self, config: Config) -> Result<(), CommandError> {
        self.config_manager.save(&config)?;
        apply_output_preferences(&config);
        self.config = config;
        Ok(())
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn tracker(&self) -> &FinanceTracker {
        &self.tracker
    }

    pub(crate) fn currency(&self) -> &str {
        &self.config.currency_symbol
    }

    pub(crate) fn prompt(&self) -> String {
        "finance> ".to_string()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|def| def.handler) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    /// Tokenises and dispatches one input line.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        let control = self.dispatch(&command, raw, &args)?;
        if control == LoopControl::Exit {
            self.running = false;
        }
        Ok(control)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let lowered = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &lowered), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::hint(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(super::io::confirm_action(&self.theme, "Exit shell?", true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Ledger(err) if err.is_validation() => {
                output::error(err);
            }
            CommandError::Ledger(LedgerError::Io(err)) => {
                output::error(format!("Could not save transactions: {err}"));
            }
            other => output::error(other),
        }
    }
}

fn apply_output_preferences(config: &Config) {
    let color_enabled = config.ui_color_enabled && std::env::var_os("NO_COLOR").is_none();
    output::set_preferences(OutputPreferences {
        color_enabled,
        plain_mode: !color_enabled,
    });
}
