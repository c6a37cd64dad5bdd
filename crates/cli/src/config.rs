//! Configuration file loading and environment variable handling.
//!
//! Precedence: CLI args > Environment vars > Config file > Defaults

use calimport_core::config::{DEFAULT_TIME, DEFAULT_TITLE, DEFAULT_TYPE};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Default config file content for `--config-init`.
pub const DEFAULT_CONFIG: &str = r#"# calimport configuration
# See: calimport --help for all options

# Title used when an event has no title text
default_title = "Session"

# Start time used when an event has no time (HH:MM, 24-hour)
default_time = "09:00"

# Session type given to every imported candidate
default_type = "session"

# Disable colored output
no_color = false
"#;

/// Configuration loaded from file and environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_title: Option<String>,
    pub default_time: Option<String>,
    pub default_type: Option<String>,
    pub no_color: Option<bool>,
}

/// Where a resolved setting came from, for `-v` logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Env,
    File,
    Default,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Env => "env",
            Self::File => "config",
            Self::Default => "default",
        })
    }
}

impl Config {
    /// Get the config file path.
    ///
    /// - Linux/macOS: `~/.config/calimport/config.toml`
    /// - Windows: `%APPDATA%\calimport\config.toml`
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("calimport").join("config.toml"))
    }

    /// Load config from file. Returns default if file doesn't exist.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };

        let Ok(contents) = fs::read_to_string(&path) else {
            return Self::default();
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Read a non-empty string from an environment variable.
    fn env_string(name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.trim().is_empty())
    }

    fn resolve(env: &str, file: &Option<String>, default: &str) -> (String, Source) {
        if let Some(value) = Self::env_string(env) {
            return (value, Source::Env);
        }
        if let Some(value) = file.clone() {
            return (value, Source::File);
        }
        (default.to_string(), Source::Default)
    }

    /// Get default_title with precedence: env > config > default.
    pub fn default_title(&self) -> (String, Source) {
        Self::resolve("CALIMPORT_DEFAULT_TITLE", &self.default_title, DEFAULT_TITLE)
    }

    /// Get default_time with precedence: env > config > default.
    pub fn default_time(&self) -> (String, Source) {
        Self::resolve("CALIMPORT_DEFAULT_TIME", &self.default_time, DEFAULT_TIME)
    }

    /// Get default_type with precedence: env > config > default.
    pub fn default_type(&self) -> (String, Source) {
        Self::resolve("CALIMPORT_DEFAULT_TYPE", &self.default_type, DEFAULT_TYPE)
    }

    /// Get no_color with precedence: env > config > default.
    ///
    /// Respects the `NO_COLOR` standard (https://no-color.org/).
    pub fn no_color(&self) -> bool {
        // NO_COLOR is a standard - presence means disable color
        if std::env::var("NO_COLOR").is_ok() {
            return true;
        }
        if std::env::var("CALIMPORT_NO_COLOR").is_ok() {
            return true;
        }
        self.no_color.unwrap_or(false)
    }
}

/// Create a default config file at the standard location.
pub fn init_config() -> Result<PathBuf, String> {
    let path = Config::path().ok_or("Cannot determine config directory")?;

    if path.exists() {
        return Err(format!("Config file already exists: {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create directory: {}", e))?;
    }

    fs::write(&path, DEFAULT_CONFIG).map_err(|e| format!("Failed to write config: {}", e))?;

    Ok(path)
}
