//! Raw HTTP responses as returned by [`PaystackClient::send`](crate::PaystackClient::send).
//!
//! The client never fails on a non-2xx status, so a [`RawResponse`] may describe
//! either a success or a failure. It keeps the body text together with the status
//! so the error normalizer can inspect both.

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// A response received from Paystack, whatever its status.
///
/// # Examples
///
/// ```no_run
/// use paystack::{Config, PaystackClient};
/// use http::Method;
/// use serde_json::Map;
///
/// # async fn example() -> Result<(), paystack::Error> {
/// let client = PaystackClient::new(Config::builder("sk_test_xxx").build()?)?;
///
/// let response = client.send(Method::GET, "bank", &Map::new()).await?;
///
/// println!("Status: {}", response.status);
/// println!("Request took {:?}", response.latency);
/// println!("Attempts: {}", response.attempts);
/// if !response.is_success() {
///     println!("Failure body: {}", response.body);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The raw response body as a string.
    pub body: String,

    /// Time from the first attempt until this response was received.
    pub latency: Duration,

    /// The number of attempts made, `1` when no retry was needed.
    pub attempts: usize,
}

impl RawResponse {
    /// Creates a new `RawResponse`.
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: String,
        latency: Duration,
        attempts: usize,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            latency,
            attempts,
        }
    }

    /// Returns `true` for a 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns `true` if the request required retries.
    pub fn was_retried(&self) -> bool {
        self.attempts > 1
    }

    /// Deserializes the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }

    /// Returns the `message` string of a JSON body, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use paystack::RawResponse;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = RawResponse::new(
    ///     StatusCode::NOT_FOUND,
    ///     HeaderMap::new(),
    ///     r#"{"status":false,"message":"Customer not found"}"#.to_string(),
    ///     Duration::from_millis(40),
    ///     1,
    /// );
    ///
    /// assert_eq!(response.message().as_deref(), Some("Customer not found"));
    /// ```
    pub fn message(&self) -> Option<String> {
        match self.json::<Value>().ok()?.get("message")? {
            Value::String(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Returns a reference to a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn response(status: StatusCode, body: &str) -> RawResponse {
        RawResponse::new(
            status,
            HeaderMap::new(),
            body.to_string(),
            Duration::from_millis(10),
            1,
        )
    }

    #[test]
    fn test_message_requires_string_field() {
        assert_eq!(
            response(StatusCode::BAD_REQUEST, r#"{"message":"Invalid key"}"#)
                .message()
                .as_deref(),
            Some("Invalid key")
        );
        assert_eq!(
            response(StatusCode::BAD_REQUEST, r#"{"message":42}"#).message(),
            None
        );
        assert_eq!(response(StatusCode::BAD_GATEWAY, "<html>").message(), None);
    }

    #[test]
    fn test_header_lookup() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let response = RawResponse::new(
            StatusCode::OK,
            headers,
            String::new(),
            Duration::ZERO,
            2,
        );

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert!(response.was_retried());
        assert!(response.is_success());
    }
}
