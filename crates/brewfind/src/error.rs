//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and distinct exit codes.

use miette::Diagnostic;
use thiserror::Error;

use brewfind_config::ConfigError;
use brewfind_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Fetch ────────────────────────────────────────────────────────

    #[error("Could not fetch the brewery directory: {message}")]
    #[diagnostic(
        code(brewfind::fetch_failed),
        help(
            "Check your network connection and that the endpoint is reachable.\n\
             Override it with --endpoint or `endpoint` in the config file."
        )
    )]
    FetchFailed { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(brewfind::not_found),
        help("Run: brewfind {list_command} to see available {resource_type} values")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(brewfind::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(brewfind::config_exists),
        help("Use `brewfind config init --force` to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(
        code(brewfind::config),
        help("Run: brewfind config path to locate the config file")
    )]
    Config(#[from] ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(brewfind::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(brewfind::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(brewfind::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to render TOML: {0}")]
    #[diagnostic(code(brewfind::toml))]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FetchFailed { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            Self::ConfigExists { .. } => exit_code::CONFLICT,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Fetch { message } => Self::FetchFailed { message },
            CoreError::Config { message } => Self::Validation {
                field: "endpoint".into(),
                reason: message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failure_keeps_transport_message() {
        let err = CliError::from(CoreError::Fetch {
            message: "Request failed with status code 503".into(),
        });
        assert_eq!(err.exit_code(), exit_code::CONNECTION);
        assert!(err.to_string().contains("Request failed with status code 503"));
    }

    #[test]
    fn bad_endpoint_is_a_usage_error() {
        let err = CliError::from(CoreError::Config {
            message: "invalid endpoint URL".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn not_found_has_its_own_code() {
        let err = CliError::NotFound {
            resource_type: "city".into(),
            identifier: "Boulder".into(),
            list_command: "cities --state Texas".into(),
        };
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert_eq!(err.to_string(), "city 'Boulder' not found");
    }
}
