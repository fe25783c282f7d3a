//! Error types for Paystack API calls.
//!
//! Errors fall into three families. Programming errors (an unsupported verb, a
//! payload that is not a JSON object, bad configuration) are returned as-is.
//! Upstream failures (a non-2xx response, an undecodable 2xx body) are turned into
//! a `status: false` [`Envelope`](crate::Envelope) by the resource services.
//! Transport failures are retried and, once the attempts run out, surface as
//! [`Error::MaxRetriesExceeded`].

use crate::RawResponse;
use http::{Method, StatusCode};

/// The main error type for Paystack API calls.
///
/// # Examples
///
/// ```no_run
/// use paystack::{Config, Error, PaystackClient};
/// use serde_json::Map;
///
/// # async fn example() -> Result<(), Error> {
/// let client = PaystackClient::new(Config::builder("sk_test_xxx").build()?)?;
///
/// match client.get("transaction/verify/ref_123", &Map::new()).await {
///     Ok(response) => println!("Success: {}", response.body),
///     Err(Error::Request { message, response }) => {
///         eprintln!("Paystack said {} (HTTP {})", message, response.status);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A network-level error occurred (connection refused, DNS lookup failed, etc.).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Any other HTTP client failure (building the request, following
    /// redirects, decoding the body). Never retried.
    #[error("HTTP client error: {0}")]
    Http(#[source] reqwest::Error),

    /// Paystack answered with a non-2xx status.
    ///
    /// `message` is the `message` field of the JSON body when present, or a
    /// fixed fallback otherwise. The original response is kept for diagnostics.
    #[error("{message}")]
    Request {
        /// Human-readable failure message
        message: String,
        /// The response that triggered the failure
        response: Box<RawResponse>,
    },

    /// A 2xx response body could not be decoded as a JSON object.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// The requested HTTP verb is not one the client sends.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(Method),

    /// Invalid configuration was provided.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Every attempt failed at the transport level.
    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded {
        /// The number of attempts made
        attempts: usize,
        /// The last error encountered
        last_error: Box<Error>,
    },

    /// The payload could not be serialized into a flat JSON object.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() || err.is_request() || err.is_body() {
            Error::Network(err)
        } else {
            Error::Http(err)
        }
    }
}

impl Error {
    /// Returns `true` if this is a transport failure worth another attempt.
    ///
    /// Only network errors and timeouts qualify. Non-2xx responses are answers
    /// from Paystack and are never retried.
    ///
    /// # Examples
    ///
    /// ```
    /// use paystack::Error;
    ///
    /// assert!(Error::Timeout.is_retryable());
    /// assert!(!Error::ConfigurationError("bad".to_string()).is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Timeout)
    }

    /// Returns `true` if the error came from Paystack's answer rather than from
    /// the transport or from the caller.
    ///
    /// These are the errors resource services fold into a failure envelope.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Error::Request { .. } | Error::DeserializationFailed { .. }
        )
    }

    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Request { response, .. } => Some(response.status),
            Error::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Request { response, .. } => Some(&response.body),
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns the upstream response that caused a [`Error::Request`] failure.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Error::Request { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// A specialized `Result` type for Paystack API calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;
    use std::time::Duration;

    fn request_error(status: StatusCode, body: &str) -> Error {
        Error::Request {
            message: "not found".to_string(),
            response: Box::new(RawResponse::new(
                status,
                HeaderMap::new(),
                body.to_string(),
                Duration::from_millis(5),
                1,
            )),
        }
    }

    #[test]
    fn test_only_transport_errors_are_retryable() {
        assert!(Error::Timeout.is_retryable());
        assert!(!request_error(StatusCode::INTERNAL_SERVER_ERROR, "").is_retryable());
        assert!(!Error::UnsupportedMethod(Method::PATCH).is_retryable());
    }

    #[test]
    fn test_client_side_reqwest_errors_are_not_retryable() {
        let err: Error = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err()
            .into();

        assert!(matches!(err, Error::Http(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_upstream_failure_classification() {
        assert!(request_error(StatusCode::NOT_FOUND, "{}").is_upstream_failure());
        assert!(Error::DeserializationFailed {
            raw_response: "<html>".to_string(),
            serde_error: "expected value".to_string(),
            status: StatusCode::OK,
        }
        .is_upstream_failure());
        assert!(!Error::Timeout.is_upstream_failure());
        assert!(!Error::MaxRetriesExceeded {
            attempts: 3,
            last_error: Box::new(Error::Timeout),
        }
        .is_upstream_failure());
    }

    #[test]
    fn test_request_error_exposes_response() {
        let err = request_error(StatusCode::NOT_FOUND, r#"{"message":"not found"}"#);
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.raw_response(), Some(r#"{"message":"not found"}"#));
        assert!(err.response().is_some());
    }
}
