//! Shared configuration for the brewfind CLI and TUI.
//!
//! A single TOML file (optional) layered over built-in defaults and
//! `BREWFIND_`-prefixed environment variables, plus translation to
//! `brewfind_api::TransportConfig`. Both binaries depend on this crate;
//! their command-line flags override whatever it resolves.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use brewfind_api::{DEFAULT_ENDPOINT, TransportConfig, transport::DEFAULT_USER_AGENT};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Directory listing endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds. Absent leaves the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Terminal UI settings.
    #[serde(default)]
    pub tui: TuiSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
            user_agent: default_user_agent(),
            tui: TuiSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TuiSettings {
    /// Tick interval (animation, status refresh) in milliseconds.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Render interval in milliseconds.
    #[serde(default = "default_render_rate")]
    pub render_rate_ms: u64,

    /// Log file path. Absent means `<temp dir>/brewfind-tui.log`.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            render_rate_ms: default_render_rate(),
            log_file: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}
fn default_tick_rate() -> u64 {
    250
}
fn default_render_rate() -> u64 {
    33
}

impl Config {
    /// Check values that figment cannot type-check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url: url::Url = self.endpoint.parse().map_err(|_| ConfigError::Validation {
            field: "endpoint".into(),
            reason: format!("invalid URL: {}", self.endpoint),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "endpoint".into(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Validation {
                field: "timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.tui.tick_rate_ms == 0 || self.tui.render_rate_ms == 0 {
            return Err(ConfigError::Validation {
                field: "tui".into(),
                reason: "tick_rate_ms and render_rate_ms must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Transport settings for `brewfind_api::BreweryClient`.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Resolved log file for the TUI.
    pub fn log_file(&self) -> PathBuf {
        self.tui
            .log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("brewfind-tui.log"))
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "brewfind").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("brewfind");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path, still layering `BREWFIND_*` env vars.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("BREWFIND_").split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
