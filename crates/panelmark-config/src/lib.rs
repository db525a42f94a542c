use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {config_path}: {source}")]
    ConfigWriteError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerializeError(#[from] toml::ser::Error),
}

/// Rendering preferences read from `config.toml`.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `class` attribute for rendered tables. Empty means no attribute.
    pub table_class: String,
    /// Whether links get `target="_blank"`.
    pub open_links_in_new_tab: bool,
    /// When set, output is wrapped in `<div class="...">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_class: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            table_class: Config::DEFAULT_TABLE_CLASS.to_owned(),
            open_links_in_new_tab: true,
            container_class: None,
        }
    }
}

impl Config {
    pub const DEFAULT_TABLE_CLASS: &'static str = "md-table";
    pub const FILE_NAME: &'static str = "config.toml";

    /// Reads and parses `config_path`. A file that does not exist is `Ok(None)`.
    pub fn load_from_path(config_path: impl AsRef<Path>) -> Result<Option<Config>, ConfigError> {
        let path = config_path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::ConfigReadError {
                    config_path: path.to_owned(),
                    source,
                });
            }
        };

        toml::from_str(&text)
            .map(Some)
            .map_err(|source| ConfigError::ConfigParseError {
                config_path: path.to_owned(),
                source,
            })
    }

    /// Loads from [`Config::config_path`].
    pub fn load() -> Result<Option<Config>, ConfigError> {
        Config::load_from_path(Config::config_path())
    }

    /// Writes the config as pretty TOML, creating missing parent directories.
    pub fn save_to_path(&self, config_path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = config_path.as_ref();
        let write_error = |source| ConfigError::ConfigWriteError {
            config_path: path.to_owned(),
            source,
        };

        let text = toml::to_string_pretty(self)?;
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(write_error)?;
        }
        fs::write(path, text).map_err(write_error)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(Config::config_path())
    }

    /// `~/.config/panelmark/config.toml`, with the home directory expanded.
    pub fn config_path() -> PathBuf {
        let dir = shellexpand::tilde("~/.config/panelmark");
        Path::new(dir.as_ref()).join(Config::FILE_NAME)
    }

    /// The table class to render with, `None` when blank.
    pub fn table_class(&self) -> Option<&str> {
        let class = self.table_class.trim();
        (!class.is_empty()).then_some(class)
    }

    /// The container class, `None` when unset or blank.
    pub fn container_class(&self) -> Option<&str> {
        self.container_class
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Expands `~` and environment variables in a user-supplied path.
///
/// Falls back to the path as given when a variable is undefined.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .unwrap_or_else(|_| path.to_owned())
}
