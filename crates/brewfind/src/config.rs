//! CLI configuration: thin wrapper around `brewfind_config`.
//!
//! Loads the shared file/env configuration and applies `GlobalOpts` flag
//! overrides (--endpoint, --timeout) on top.

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use brewfind_config::{Config, config_path, load_config, save_config};

/// Resolve the effective configuration: file + env, then CLI flags.
pub fn resolve(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = load_config()?;
    apply_overrides(&mut cfg, global)?;
    Ok(cfg)
}

/// Apply flag overrides. Flags win over config file and env values.
pub fn apply_overrides(cfg: &mut Config, global: &GlobalOpts) -> Result<(), CliError> {
    if let Some(ref endpoint) = global.endpoint {
        cfg.endpoint.clone_from(endpoint);
    }
    if let Some(timeout) = global.timeout {
        if timeout == 0 {
            return Err(CliError::Validation {
                field: "timeout".into(),
                reason: "must be greater than zero".into(),
            });
        }
        cfg.timeout_secs = Some(timeout);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::{ColorMode, OutputFormat};
    use std::time::Duration;

    fn global(endpoint: Option<&str>, timeout: Option<u64>) -> GlobalOpts {
        GlobalOpts {
            endpoint: endpoint.map(str::to_owned),
            timeout,
            output: OutputFormat::Table,
            color: ColorMode::Never,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = Config::default();
        apply_overrides(
            &mut cfg,
            &global(Some("http://localhost:9000/breweries"), Some(3)),
        )
        .unwrap();
        assert_eq!(cfg.endpoint, "http://localhost:9000/breweries");
        assert_eq!(cfg.transport().timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let mut cfg = Config::default();
        apply_overrides(&mut cfg, &global(None, None)).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut cfg = Config::default();
        let err = apply_overrides(&mut cfg, &global(None, Some(0))).unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
    }
}
