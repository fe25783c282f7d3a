//! Authenticated HTTP client for the Paystack API.
//!
//! [`PaystackClient`] builds requests, injects the bearer token and JSON headers,
//! retries transport failures and hands back the raw response whatever its
//! status. [`PaystackClient::check_response`] then turns a non-2xx response into
//! an [`Error::Request`].

use crate::{
    envelope::FALLBACK_FAILURE_MESSAGE,
    metadata::{Payload, RequestMetadata},
    Config, Error, RawResponse, Result,
};
use http::{header, HeaderMap, HeaderValue, Method};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// An HTTP client for the Paystack API.
///
/// The client is cheap to clone and meant to be reused: clones share one
/// connection pool and one immutable [`Config`].
///
/// # Examples
///
/// ```no_run
/// use paystack::{Config, PaystackClient};
/// use serde_json::{json, Map};
///
/// # async fn example() -> Result<(), paystack::Error> {
/// let client = PaystackClient::new(Config::builder("sk_test_xxx").build()?)?;
///
/// // GET with query parameters
/// let mut query = Map::new();
/// query.insert("perPage".to_string(), json!(20));
/// let banks = client.get("bank", &query).await?;
/// println!("Banks: {}", banks.body);
///
/// // POST with a JSON body
/// let payload = paystack::to_payload(&json!({"email": "a@b.com", "amount": 10000}))?;
/// let init = client.post("transaction/initialize", &payload).await?;
/// println!("Initialized in {:?}", init.latency);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PaystackClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    config: Config,
    default_headers: HeaderMap,
}

impl fmt::Debug for PaystackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaystackClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

impl PaystackClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key cannot be used as a header value or the
    /// underlying HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let mut authorization = HeaderValue::try_from(format!("Bearer {}", config.secret_key()))
            .map_err(|e| Error::ConfigurationError(format!("Invalid secret key: {}", e)))?;
        authorization.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(header::AUTHORIZATION, authorization);
        default_headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let http_client = reqwest::Client::builder()
            .http1_only()
            .build()
            .map_err(|e| {
                Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http_client,
                config,
                default_headers,
            }),
        })
    }

    /// Creates a client from `PAYSTACK_*` environment variables.
    ///
    /// See [`Config::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Sends one request and returns the raw response, whatever its status.
    ///
    /// The payload becomes query parameters for GET and DELETE and the JSON body
    /// for POST and PUT. Transport failures are retried according to the
    /// configured [`RetryPolicy`](crate::RetryPolicy); non-2xx responses are not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedMethod`] for any verb other than GET, POST,
    /// PUT and DELETE, without sending anything. Returns
    /// [`Error::MaxRetriesExceeded`] once every attempt failed at the transport
    /// level.
    pub async fn send(
        &self,
        method: Method,
        path: impl Into<String>,
        payload: &Payload,
    ) -> Result<RawResponse> {
        if !matches!(
            method,
            Method::GET | Method::POST | Method::PUT | Method::DELETE
        ) {
            return Err(Error::UnsupportedMethod(method));
        }

        let metadata = RequestMetadata::new(method, path).with_payload(payload.clone());
        self.call(&metadata).await
    }

    /// Turns a non-2xx response into an [`Error::Request`].
    ///
    /// The error message is the `message` string of the JSON body, or
    /// `"Paystack request failed."` when there is none. Successful responses are
    /// returned unchanged.
    pub fn check_response(response: RawResponse) -> Result<RawResponse> {
        if response.is_success() {
            return Ok(response);
        }

        let message = response
            .message()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string());

        tracing::error!(
            status = response.status.as_u16(),
            response = %response.body,
            "Paystack API error"
        );

        Err(Error::Request {
            message,
            response: Box::new(response),
        })
    }

    /// Sends a request and checks its status.
    pub async fn request(
        &self,
        method: Method,
        path: impl Into<String>,
        payload: &Payload,
    ) -> Result<RawResponse> {
        let response = self.send(method, path, payload).await?;
        Self::check_response(response)
    }

    /// Makes a GET request with the given query parameters.
    pub async fn get(&self, path: impl Into<String>, query: &Payload) -> Result<RawResponse> {
        self.request(Method::GET, path, query).await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post(&self, path: impl Into<String>, body: &Payload) -> Result<RawResponse> {
        self.request(Method::POST, path, body).await
    }

    /// Makes a PUT request with a JSON body.
    pub async fn put(&self, path: impl Into<String>, body: &Payload) -> Result<RawResponse> {
        self.request(Method::PUT, path, body).await
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: impl Into<String>) -> Result<RawResponse> {
        self.request(Method::DELETE, path, &Payload::new()).await
    }

    async fn call(&self, metadata: &RequestMetadata) -> Result<RawResponse> {
        let policy = self.inner.config.retry_policy();
        let start_time = Instant::now();
        let mut attempt = 0;

        loop {
            attempt += 1;

            let result = match self.execute_request(metadata, attempt).await {
                Ok(response) => self.read_response(response, start_time, attempt).await,
                Err(e) => Err(e),
            };

            let e = match result {
                Ok(response) => return Ok(response),
                Err(e) => e,
            };

            tracing::warn!(
                error = %e,
                attempt = attempt,
                method = %metadata.method,
                path = %metadata.path,
                "Request failed"
            );

            if !e.is_retryable() {
                return Err(e);
            }

            match policy.delay_for_attempt(attempt) {
                Some(delay) => {
                    tracing::info!(
                        delay_ms = delay.as_millis(),
                        attempt = attempt,
                        "Retrying request after delay"
                    );
                    tokio::time::sleep(delay).await;
                }
                None => {
                    return Err(Error::MaxRetriesExceeded {
                        attempts: attempt,
                        last_error: Box::new(e),
                    });
                }
            }
        }
    }

    /// Executes a single request attempt.
    async fn execute_request(
        &self,
        metadata: &RequestMetadata,
        attempt: usize,
    ) -> Result<reqwest::Response> {
        let mut url = self.endpoint_url(&metadata.path)?;

        if !metadata.sends_body() {
            let pairs = metadata.query_pairs();
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }

        tracing::debug!(
            method = %metadata.method,
            url = %url,
            attempt = attempt,
            "Executing HTTP request"
        );

        let mut request = self
            .inner
            .http_client
            .request(metadata.method.clone(), url)
            .headers(self.inner.default_headers.clone());

        if let Some(timeout) = self.inner.config.timeout() {
            request = request.timeout(timeout);
        }

        if metadata.sends_body() {
            request = request.json(&metadata.payload);
        }

        Ok(request.send().await?)
    }

    /// Reads the whole body so status and text travel together.
    async fn read_response(
        &self,
        response: reqwest::Response,
        start_time: Instant,
        attempts: usize,
    ) -> Result<RawResponse> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        let latency = start_time.elapsed();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            attempts = attempts,
            "Received HTTP response"
        );

        Ok(RawResponse::new(status, headers, body, latency, attempts))
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&join_url(
            self.inner.config.base_url().as_str(),
            path,
        ))?)
    }
}

/// Joins a base URL and a path with exactly one `/` between them.
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use std::time::Duration;

    fn response(status: StatusCode, body: &str) -> RawResponse {
        RawResponse::new(
            status,
            HeaderMap::new(),
            body.to_string(),
            Duration::from_millis(1),
            1,
        )
    }

    #[test]
    fn test_join_url_uses_single_separator() {
        assert_eq!(
            join_url("https://api.paystack.co/", "/transaction/initialize"),
            "https://api.paystack.co/transaction/initialize"
        );
        assert_eq!(
            join_url("https://api.paystack.co", "bank"),
            "https://api.paystack.co/bank"
        );
        assert_eq!(
            join_url("http://localhost:8080/v1/", "//plan/PLN_1"),
            "http://localhost:8080/v1/plan/PLN_1"
        );
    }

    #[test]
    fn test_check_response_passes_success_through() {
        let checked =
            PaystackClient::check_response(response(StatusCode::CREATED, r#"{"status":true}"#))
                .unwrap();
        assert_eq!(checked.status, StatusCode::CREATED);
    }

    #[test]
    fn test_check_response_uses_body_message() {
        let err = PaystackClient::check_response(response(
            StatusCode::NOT_FOUND,
            r#"{"status":false,"message":"not found"}"#,
        ))
        .unwrap_err();

        match err {
            Error::Request { message, response } => {
                assert_eq!(message, "not found");
                assert_eq!(response.status, StatusCode::NOT_FOUND);
            }
            other => panic!("Expected Request error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_response_falls_back_without_message() {
        let err = PaystackClient::check_response(response(StatusCode::BAD_GATEWAY, "<html>"))
            .unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_FAILURE_MESSAGE);
    }

    #[test]
    fn test_debug_redacts_secret_key() {
        let client = PaystackClient::new(Config::builder("sk_live_hidden").build().unwrap())
            .unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("sk_live_hidden"));
    }
}
