use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?} (use true/True/1/on/ON/false/False/0/off/OFF)")]
    InvalidEnvBool { var: String, value: String },

    #[error("read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("config {path} is empty (expected TOML booleans: true/false)")]
    Empty { path: String },

    #[error("unknown key {key:?} in config {path}")]
    UnknownKey { path: String, key: String },

    #[error("config {path}: key {key:?} expects {expected}")]
    WrongType {
        path: String,
        key: String,
        expected: &'static str,
    },
}
