// ── Core error types ──
//
// User-facing errors from heroes-core. Consumers never see raw HTTP
// status codes or JSON parse failures; the `From<heroes_api::Error>`
// impl translates transport-layer errors into domain variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach hero server at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to hero server timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Hero not found: {identifier}")]
    NotFound { identifier: String },

    // ── Navigation errors ────────────────────────────────────────────
    #[error("Invalid route parameter '{name}': {reason}")]
    InvalidRouteParam { name: String, reason: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<heroes_api::Error> for CoreError {
    fn from(err: heroes_api::Error) -> Self {
        if err.is_not_found() {
            return CoreError::NotFound {
                identifier: not_found_identifier(&err),
            };
        }

        let status = err.status();
        match err {
            heroes_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status,
                    }
                }
            }
            heroes_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            heroes_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            heroes_api::Error::Api { url, message, .. } => CoreError::Api {
                message: format!("{url}: {message}"),
                status,
            },
            heroes_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

/// Last path segment of the request URL, ignoring query and fragment.
fn not_found_identifier(err: &heroes_api::Error) -> String {
    let url = match err {
        heroes_api::Error::Api { url, .. } => url.clone(),
        heroes_api::Error::Transport(e) => e.url().map(ToString::to_string).unwrap_or_default(),
        _ => String::new(),
    };
    url.split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_trailing_identifier() {
        let err = CoreError::from(heroes_api::Error::Api {
            url: "http://localhost:3000/api/heroes/42".into(),
            status: 404,
            message: "Not Found".into(),
        });
        assert!(matches!(err, CoreError::NotFound { .. }));
        assert_eq!(err.to_string(), "Hero not found: 42");
    }

    #[test]
    fn not_found_identifier_ignores_query() {
        let err = CoreError::from(heroes_api::Error::Api {
            url: "http://localhost:3000/api/heroes?name=mag".into(),
            status: 404,
            message: "Not Found".into(),
        });
        match err {
            CoreError::NotFound { identifier } => assert_eq!(identifier, "heroes"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn server_error_becomes_api_error() {
        let err = CoreError::from(heroes_api::Error::Api {
            url: "http://localhost:3000/api/heroes".into(),
            status: 500,
            message: "Internal Server Error".into(),
        });
        match err {
            CoreError::Api { status, message } => {
                assert_eq!(status, Some(500));
                assert!(message.contains("Internal Server Error"));
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }
}
