use std::path::{Path, PathBuf};

use toml::Value;

use crate::error::ConfigError;

/// Values read from the optional config file. A missing file yields the
/// default; a present file must parse and may only contain known keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSettings {
    pub confirm_context: Option<bool>,
    pub non_interactive: Option<bool>,
    pub ignore_fzf: Option<bool>,
    pub confirm_keywords: Option<Vec<String>>,
}

impl FileSettings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source: err,
                });
            }
        };
        Self::parse(&contents, &path.display().to_string())
    }

    pub fn parse(contents: &str, path: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: path.to_string(),
            });
        }
        let table: toml::Table = contents.parse().map_err(|err| ConfigError::Parse {
            path: path.to_string(),
            source: err,
        })?;

        let mut settings = Self::default();
        for (key, value) in table {
            match key.as_str() {
                "confirm-context" => {
                    settings.confirm_context = Some(expect_bool(path, &key, &value)?);
                }
                "non-interactive" => {
                    settings.non_interactive = Some(expect_bool(path, &key, &value)?);
                }
                "ignore-fzf" => {
                    settings.ignore_fzf = Some(expect_bool(path, &key, &value)?);
                }
                "confirm-context-keywords" => {
                    settings.confirm_keywords = Some(expect_string_list(path, &key, &value)?);
                }
                _ => {
                    return Err(ConfigError::UnknownKey {
                        path: path.to_string(),
                        key,
                    });
                }
            }
        }
        Ok(settings)
    }
}

/// `$XDG_CONFIG_HOME/podhop/config.toml` (or the platform equivalent).
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("podhop")
        .join("config.toml")
}

fn expect_bool(path: &str, key: &str, value: &Value) -> Result<bool, ConfigError> {
    match value {
        Value::Boolean(b) => Ok(*b),
        _ => Err(ConfigError::WrongType {
            path: path.to_string(),
            key: key.to_string(),
            expected: "a boolean",
        }),
    }
}

fn expect_string_list(path: &str, key: &str, value: &Value) -> Result<Vec<String>, ConfigError> {
    let wrong_type = || ConfigError::WrongType {
        path: path.to_string(),
        key: key.to_string(),
        expected: "an array of strings",
    };
    let Value::Array(items) = value else {
        return Err(wrong_type());
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(wrong_type()),
        })
        .collect()
}
