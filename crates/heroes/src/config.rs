//! CLI configuration: thin wrapper around `heroes_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--server, --collection, --timeout, --strict, --insecure).

use std::time::Duration;

use heroes_core::{FailurePolicy, ServiceConfig, TlsVerification};

use clap::ValueEnum;
use tracing::warn;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use heroes_config::{
    Config, Profile, config_path, default_collection, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Fill `--output` and `--color` from `[defaults]` when neither flag nor
/// env var set them. Unknown values are ignored with a warning.
pub fn apply_defaults(global: &mut GlobalOpts, cfg: &Config) {
    if global.output.is_none() {
        global.output = parse_default::<OutputFormat>("output", &cfg.defaults.output);
    }
    if global.color.is_none() {
        global.color = parse_default::<ColorMode>("color", &cfg.defaults.color);
    }
}

fn parse_default<T: ValueEnum>(key: &str, raw: &str) -> Option<T> {
    T::from_str(raw, true)
        .inspect_err(|e| warn!(key, value = raw, error = %e, "ignoring invalid config default"))
        .ok()
}

/// Build a `ServiceConfig` from the config file, active profile, and flags.
///
/// Precedence: flag / env > profile > `[defaults]`.
pub fn build_service_config(global: &GlobalOpts, cfg: &Config) -> Result<ServiceConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);
    let profile = cfg.profiles.get(&profile_name);

    // An explicitly requested profile must exist.
    if profile.is_none() && global.profile.is_some() {
        let mut available: Vec<_> = cfg.profiles.keys().cloned().collect();
        available.sort();
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: if available.is_empty() {
                "(none)".into()
            } else {
                available.join(", ")
            },
        });
    }

    let mut service = match (profile, global.server.as_deref()) {
        (Some(profile), _) => heroes_config::profile_to_service_config(profile, &cfg.defaults)?,
        (None, Some(server)) => ServiceConfig {
            timeout: Duration::from_secs(cfg.defaults.timeout),
            failure_policy: cfg.defaults.failure_policy,
            ..ServiceConfig::new(parse_server(server)?, default_collection())
        },
        (None, None) => {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        }
    };

    if let Some(server) = global.server.as_deref() {
        service.server = parse_server(server)?;
    }
    if let Some(ref collection) = global.collection {
        service.collection.clone_from(collection);
    }
    if let Some(timeout) = global.timeout {
        service.timeout = Duration::from_secs(timeout);
    }
    if global.insecure {
        service.tls = TlsVerification::DangerAcceptInvalid;
    }
    if global.strict {
        service.failure_policy = FailurePolicy::Propagate;
    }

    Ok(service)
}

fn parse_server(raw: &str) -> Result<url::Url, CliError> {
    raw.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {raw}"),
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn cfg_with_defaults(output: &str, color: &str) -> Config {
        let mut cfg = Config::default();
        cfg.defaults.output = output.into();
        cfg.defaults.color = color.into();
        cfg
    }

    #[test]
    fn config_defaults_fill_unset_flags() {
        let mut cli = Cli::parse_from(["heroes", "list"]);
        apply_defaults(&mut cli.global, &cfg_with_defaults("json-compact", "never"));

        assert!(matches!(cli.global.output_format(), OutputFormat::JsonCompact));
        assert!(matches!(cli.global.color_mode(), ColorMode::Never));
    }

    #[test]
    fn flags_win_over_config_defaults() {
        let mut cli = Cli::parse_from(["heroes", "-o", "yaml", "--color", "always", "list"]);
        apply_defaults(&mut cli.global, &cfg_with_defaults("plain", "never"));

        assert!(matches!(cli.global.output_format(), OutputFormat::Yaml));
        assert!(matches!(cli.global.color_mode(), ColorMode::Always));
    }

    #[test]
    fn invalid_config_default_falls_back() {
        let mut cli = Cli::parse_from(["heroes", "list"]);
        apply_defaults(&mut cli.global, &cfg_with_defaults("xml", "sometimes"));

        assert!(matches!(cli.global.output_format(), OutputFormat::Table));
        assert!(matches!(cli.global.color_mode(), ColorMode::Auto));
    }
}
