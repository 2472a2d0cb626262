//! Global caldeck configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::calendar_state::View;
use crate::error::{CalDeckError, CalDeckResult};

static DEFAULT_DATA_DIR: &str = "~/.caldeck";
static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn is_default_log_level(level: &String) -> bool {
    level == DEFAULT_LOG_LEVEL
}

fn is_default_view(view: &View) -> bool {
    *view == View::default()
}

/// Configuration at ~/.config/caldeck/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CalDeckConfig {
    /// Where events and session state are stored
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// View a fresh session opens in
    #[serde(default, skip_serializing_if = "is_default_view")]
    pub default_view: View,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level", skip_serializing_if = "is_default_log_level")]
    pub log_level: String,
}

impl Default for CalDeckConfig {
    fn default() -> Self {
        CalDeckConfig {
            data_dir: default_data_dir(),
            default_view: View::default(),
            log_level: default_log_level(),
        }
    }
}

impl CalDeckConfig {
    pub fn config_path() -> CalDeckResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalDeckError::Config("Could not determine config directory".into()))?
            .join("caldeck");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/caldeck/config.toml, writing a commented default
    /// first if it does not exist yet.
    pub fn load() -> CalDeckResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CalDeckResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| CalDeckError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalDeckError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Write the config as TOML to `path`, e.g. `config_path()`.
    pub fn save_to(&self, path: &Path) -> CalDeckResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CalDeckError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| CalDeckError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalDeckResult<()> {
        let contents = format!(
            "\
# caldeck configuration

# Where events are stored:
# data_dir = \"{}\"

# View to open in (month, week or day):
# default_view = \"month\"

# Log level when RUST_LOG is not set:
# log_level = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_LOG_LEVEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalDeckError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalDeckError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
