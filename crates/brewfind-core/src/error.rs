// ── Core error types ──
//
// The finder surfaces exactly one failure kind: the fetch did not produce a
// result set. Transport, status, and decoding failures from `brewfind_api`
// all collapse into `CoreError::Fetch` carrying the transport's message.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The directory could not be read.
    #[error("{message}")]
    Fetch { message: String },

    /// A configured endpoint or client setting was rejected before any
    /// request was sent.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Human-readable text for the error banner.
    pub fn message(&self) -> &str {
        match self {
            Self::Fetch { message } | Self::Config { message } => message,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<brewfind_api::Error> for CoreError {
    fn from(err: brewfind_api::Error) -> Self {
        let message = error_chain(&err);
        match err {
            brewfind_api::Error::ClientBuild(_) => Self::Config { message },
            _ => Self::Fetch { message },
        }
    }
}

/// `err` followed by its sources, joined with `": "`.
///
/// reqwest's own Display stops at "error sending request"; the cause
/// (connection refused, DNS failure, TLS) lives further down the chain.
/// A source whose text its parent already quotes is skipped.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer(&'static str, Option<Box<Layer>>);

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for Layer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.1
                .as_deref()
                .map(|e| e as &(dyn std::error::Error + 'static))
        }
    }

    #[test]
    fn status_error_keeps_transport_message() {
        let err = CoreError::from(brewfind_api::Error::Status {
            status: 404,
            body: String::new(),
        });
        assert_eq!(err.message(), "Request failed with status code 404");
        assert!(matches!(err, CoreError::Fetch { .. }));
    }

    #[test]
    fn client_build_failure_is_a_config_error() {
        let err = CoreError::from(brewfind_api::Error::ClientBuild("no TLS backend".into()));
        assert!(matches!(err, CoreError::Config { .. }));
        assert!(err.message().contains("no TLS backend"));
    }

    #[test]
    fn chain_appends_causes_once() {
        let err = Layer(
            "HTTP transport error: error sending request",
            Some(Box::new(Layer(
                "error sending request",
                Some(Box::new(Layer("Connection refused (os error 111)", None))),
            ))),
        );
        assert_eq!(
            error_chain(&err),
            "HTTP transport error: error sending request: Connection refused (os error 111)"
        );
    }
}
