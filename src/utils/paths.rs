use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".finance_tracker";
const TRANSACTIONS_FILE: &str = "transactions.csv";
pub const HOME_ENV: &str = "FINANCE_TRACKER_HOME";

/// Returns the application data directory, defaulting to `~/.finance_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default location of the persisted transaction list.
pub fn transactions_file() -> PathBuf {
    app_data_dir().join(TRANSACTIONS_FILE)
}
