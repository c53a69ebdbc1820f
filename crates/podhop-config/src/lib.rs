pub mod error;
pub mod file;

pub use error::ConfigError;
pub use file::FileSettings;

pub const CONFIRM_CONTEXT_ENV: &str = "PODHOP_CONFIRM_CONTEXT";
pub const NON_INTERACTIVE_ENV: &str = "PODHOP_NON_INTERACTIVE";
pub const IGNORE_FZF_ENV: &str = "PODHOP_IGNORE_FZF";

pub const DEFAULT_CONFIRM_KEYWORDS: &[&str] = &["prod", "production", "live"];

/// Per-run settings, resolved once with flag > env > config file > default precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub confirm_context: bool,
    pub non_interactive: bool,
    pub ignore_fzf: bool,
    pub confirm_keywords: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            confirm_context: false,
            non_interactive: false,
            ignore_fzf: false,
            confirm_keywords: default_keywords(),
        }
    }
}

/// Explicit flag values; `None` means the flag was not given.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingOverrides {
    pub confirm_context: Option<bool>,
    pub non_interactive: Option<bool>,
    pub ignore_fzf: Option<bool>,
}

/// Raw environment values, captured once per run. Tests supply these
/// directly instead of mutating the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    pub confirm_context: Option<String>,
    pub non_interactive: Option<String>,
    pub ignore_fzf: Option<String>,
}

impl EnvSettings {
    pub fn capture() -> Self {
        Self {
            confirm_context: env_value(CONFIRM_CONTEXT_ENV),
            non_interactive: env_value(NON_INTERACTIVE_ENV),
            ignore_fzf: env_value(IGNORE_FZF_ENV),
        }
    }
}

impl Settings {
    pub fn resolve(overrides: &SettingOverrides) -> Result<Self, ConfigError> {
        let file = FileSettings::load()?;
        Self::from_sources(overrides, &EnvSettings::capture(), &file)
    }

    /// Combines flag, environment and file values; every source is passed
    /// in, so nothing here touches the process environment.
    pub fn from_sources(
        overrides: &SettingOverrides,
        env: &EnvSettings,
        file: &FileSettings,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            confirm_context: resolve_bool(
                overrides.confirm_context,
                CONFIRM_CONTEXT_ENV,
                env.confirm_context.as_deref(),
                file.confirm_context,
            )?,
            non_interactive: resolve_bool(
                overrides.non_interactive,
                NON_INTERACTIVE_ENV,
                env.non_interactive.as_deref(),
                file.non_interactive,
            )?,
            ignore_fzf: resolve_bool(
                overrides.ignore_fzf,
                IGNORE_FZF_ENV,
                env.ignore_fzf.as_deref(),
                file.ignore_fzf,
            )?,
            confirm_keywords: effective_keywords(file.confirm_keywords.as_deref()),
        })
    }
}

pub fn resolve_bool(
    flag: Option<bool>,
    env_var: &str,
    env_value: Option<&str>,
    file_value: Option<bool>,
) -> Result<bool, ConfigError> {
    if let Some(value) = flag {
        return Ok(value);
    }
    if let Some(raw) = env_value {
        return parse_bool(raw).ok_or_else(|| ConfigError::InvalidEnvBool {
            var: env_var.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(file_value.unwrap_or(false))
}

/// Boolean vocabulary shared by flags and environment variables.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "True" | "1" | "on" | "ON" => Some(true),
        "false" | "False" | "0" | "off" | "OFF" => Some(false),
        _ => None,
    }
}

/// Keywords from the file replace the defaults entirely when any survive
/// normalization (trim, lowercase, drop blanks).
pub fn effective_keywords(file_keywords: Option<&[String]>) -> Vec<String> {
    if let Some(raw) = file_keywords {
        let cleaned: Vec<String> = raw
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if !cleaned.is_empty() {
            return cleaned;
        }
    }
    default_keywords()
}

fn default_keywords() -> Vec<String> {
    DEFAULT_CONFIRM_KEYWORDS.iter().map(|k| (*k).to_string()).collect()
}

fn env_value(var: &str) -> Option<String> {
    std::env::var_os(var).map(|value| value.to_string_lossy().into_owned())
}
