use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::utils::paths;

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// User preferences for the tracker shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Transaction file location. Defaults to `transactions.csv` in the data directory.
    pub data_file: Option<PathBuf>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            data_file: None,
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_category: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_data_file(&self) -> PathBuf {
        match &self.data_file {
            Some(path) => path.clone(),
            None => paths::transactions_file(),
        }
    }
}

/// Loads and stores [`Config`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Uses `<base>/config/config.json`, creating the directory when absent.
    pub fn with_base_dir(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_dir = base.as_ref().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir)?;
        Ok(Self::new(config_dir.join(CONFIG_FILE)))
    }

    /// Manager rooted at the application data directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            debug!(path = %self.config_path.display(), "loaded configuration");
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.config_path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        debug!(path = %self.config_path.display(), "saved configuration");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
