// ── Runtime service configuration ──
//
// These types describe *how* to reach the hero collection and what to do
// when a request fails. They never touch disk: the CLI builds a
// `ServiceConfig` and hands it in.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use url::Url;

/// What the service does after logging a failed request.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FailurePolicy {
    /// Resolve with the operation's fallback value (empty list or `None`).
    #[default]
    LogAndDefault,
    /// Return the error to the caller.
    Propagate,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed dev servers).
    DangerAcceptInvalid,
}

/// Configuration for talking to one hero collection.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Server root (e.g., `http://localhost:3000`).
    pub server: Url,
    /// Collection path under the server (e.g., `api/heroes`).
    pub collection: String,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// Failure handling strategy.
    pub failure_policy: FailurePolicy,
}

impl ServiceConfig {
    pub fn new(server: Url, collection: impl Into<String>) -> Self {
        Self {
            server,
            collection: collection.into(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_policy_round_trips_through_strings() {
        assert_eq!(FailurePolicy::LogAndDefault.to_string(), "log-and-default");
        assert_eq!(
            "propagate".parse::<FailurePolicy>().ok(),
            Some(FailurePolicy::Propagate)
        );
        assert!("explode".parse::<FailurePolicy>().is_err());
    }
}
