//! Unified error type and request-fault classification.

use thiserror::Error;

/// Unified error type for the synthesis client.
///
/// [`Http`](Error::Http), [`Connection`](Error::Connection),
/// [`Timeout`](Error::Timeout) and [`Unexpected`](Error::Unexpected) together
/// classify every way a synthesis attempt can fail; the session stores their
/// display form and never lets them escape further.
/// [`Configuration`](Error::Configuration) covers client construction.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint answered with a non-OK HTTP status.
    #[error("HTTP Error {status}: {reason}\nResponse body: {body}")]
    Http {
        status: u16,
        reason: String,
        body: String,
    },

    /// The endpoint could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// No response arrived within the configured deadline.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Any fault outside the anticipated network categories.
    #[error("Unexpected error: {kind}: {detail}")]
    Unexpected { kind: String, detail: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    /// Classify a transport-level fault.
    ///
    /// Exhaustive over `reqwest::Error`: anything that is neither a timeout
    /// nor a connect failure lands in [`Error::Unexpected`] with its
    /// category name, so an in-flight request always resolves to a stored
    /// failure.
    pub(crate) fn from_request_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err.to_string())
        } else if err.is_connect() {
            Error::Connection(err.to_string())
        } else {
            let kind = if err.is_body() {
                "body"
            } else if err.is_decode() {
                "decode"
            } else if err.is_redirect() {
                "redirect"
            } else if err.is_request() {
                "request"
            } else if err.is_builder() {
                "builder"
            } else {
                "transport"
            };
            Error::Unexpected {
                kind: kind.to_string(),
                detail: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_carries_status_reason_and_body() {
        let err = Error::Http {
            status: 500,
            reason: "Internal Server Error".to_string(),
            body: "model error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("Internal Server Error"));
        assert!(message.contains("model error"));
    }

    #[test]
    fn timeout_message_indicates_a_timeout() {
        let err = Error::Timeout("deadline elapsed".to_string());
        assert!(err.to_string().starts_with("Request timed out"));
    }

    #[test]
    fn connection_message_names_the_fault() {
        let err = Error::Connection("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Connection error: connection refused"
        );
    }

    #[test]
    fn unexpected_message_carries_kind_and_detail() {
        let err = Error::Unexpected {
            kind: "decode".to_string(),
            detail: "invalid body".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected error: decode: invalid body");
    }
}
