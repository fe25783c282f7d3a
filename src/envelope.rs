//! The uniform `{status, message, data}` result every service call returns.

use crate::{Error, RawResponse, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;

/// Message used when a non-2xx body carries no `message` string.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Paystack request failed.";

/// Message used when a successful body carries no `message` string.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Request successful";

/// Result of a resource service call.
///
/// Paystack wraps its own answers in the same shape, so a successful response is
/// decoded directly. Failures are synthesized with `data` set to `None`.
///
/// `status == false` always comes with `data == None`, and `message` is never
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether Paystack accepted the request.
    pub status: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Response payload, absent on failure.
    pub data: Option<Value>,
    /// Pagination details returned by list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Envelope {
    /// Builds a failure envelope.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: false,
            message: if message.trim().is_empty() {
                FALLBACK_FAILURE_MESSAGE.to_string()
            } else {
                message
            },
            data: None,
            meta: None,
        }
    }

    /// Decodes a successful response body.
    ///
    /// The body must be a JSON object. A boolean `status` field is honoured and
    /// defaults to `true` when absent; a body reporting `status: false` becomes a
    /// failure envelope. An empty body (`204 No Content`) is a success without
    /// data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeserializationFailed`] if a non-empty body is not a JSON
    /// object.
    pub fn from_response(response: &RawResponse) -> Result<Self> {
        if response.body.trim().is_empty() {
            return Ok(Self {
                status: true,
                message: DEFAULT_SUCCESS_MESSAGE.to_string(),
                data: None,
                meta: None,
            });
        }

        let mut body = match response.json::<Value>() {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(Error::DeserializationFailed {
                    raw_response: response.body.clone(),
                    serde_error: "expected a JSON object".to_string(),
                    status: response.status,
                })
            }
            Err(e) => {
                return Err(Error::DeserializationFailed {
                    raw_response: response.body.clone(),
                    serde_error: e.to_string(),
                    status: response.status,
                })
            }
        };

        let status = body.get("status").and_then(Value::as_bool).unwrap_or(true);
        let message = match body.remove("message") {
            Some(Value::String(message)) if !message.trim().is_empty() => Some(message),
            _ => None,
        };

        if !status {
            return Ok(Self::failure(
                message.unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string()),
            ));
        }

        Ok(Self {
            status: true,
            message: message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            data: body.remove("data").filter(|data| !data.is_null()),
            meta: body.remove("meta").filter(|meta| !meta.is_null()),
        })
    }

    /// Returns `true` if the call succeeded.
    pub fn is_success(&self) -> bool {
        self.status
    }
}

/// Runs one client call and folds its outcome into an [`Envelope`].
///
/// Upstream failures (non-2xx answers, undecodable bodies) become a
/// `status: false` envelope. Transport exhaustion and programming errors are
/// returned as `Err`.
pub async fn execute_and_normalize<F>(operation: F) -> Result<Envelope>
where
    F: Future<Output = Result<RawResponse>>,
{
    let result = operation
        .await
        .and_then(|response| Envelope::from_response(&response));

    match result {
        Ok(envelope) => Ok(envelope),
        Err(e) if e.is_upstream_failure() => {
            tracing::debug!(error = %e, "Converting upstream failure into envelope");
            Ok(Envelope::failure(failure_message(&e)))
        }
        Err(e) => Err(e),
    }
}

fn failure_message(error: &Error) -> String {
    match error {
        Error::Request { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, StatusCode};
    use serde_json::json;
    use std::time::Duration;

    fn response(status: StatusCode, body: &str) -> RawResponse {
        RawResponse::new(
            status,
            HeaderMap::new(),
            body.to_string(),
            Duration::from_millis(3),
            1,
        )
    }

    #[test]
    fn test_decodes_upstream_envelope() {
        let envelope = Envelope::from_response(&response(
            StatusCode::OK,
            r#"{"status":true,"message":"Customers retrieved","data":[{"id":1}],"meta":{"page":1}}"#,
        ))
        .unwrap();

        assert!(envelope.status);
        assert_eq!(envelope.message, "Customers retrieved");
        assert_eq!(envelope.data, Some(json!([{"id": 1}])));
        assert_eq!(envelope.meta, Some(json!({"page": 1})));
    }

    #[test]
    fn test_missing_message_gets_default() {
        let envelope =
            Envelope::from_response(&response(StatusCode::OK, r#"{"data":{"id":7}}"#)).unwrap();

        assert!(envelope.status);
        assert_eq!(envelope.message, DEFAULT_SUCCESS_MESSAGE);
        assert_eq!(envelope.data, Some(json!({"id": 7})));
    }

    #[test]
    fn test_status_false_body_drops_data() {
        let envelope = Envelope::from_response(&response(
            StatusCode::OK,
            r#"{"status":false,"message":"Slug taken","data":{"slug":"x"}}"#,
        ))
        .unwrap();

        assert_eq!(envelope, Envelope::failure("Slug taken"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_non_object_body_is_deserialization_failure() {
        let result = Envelope::from_response(&response(StatusCode::OK, "[1,2]"));
        assert!(matches!(result, Err(Error::DeserializationFailed { .. })));

        let result = Envelope::from_response(&response(StatusCode::OK, "<html>"));
        assert!(matches!(result, Err(Error::DeserializationFailed { .. })));
    }

    #[test]
    fn test_empty_body_is_success_without_data() {
        for body in ["", "  \n"] {
            let raw = response(StatusCode::NO_CONTENT, body);
            let envelope = Envelope::from_response(&raw).unwrap();

            assert!(envelope.is_success());
            assert_eq!(envelope.message, DEFAULT_SUCCESS_MESSAGE);
            assert!(envelope.data.is_none());
            assert!(envelope.meta.is_none());
        }
    }

    #[test]
    fn test_failure_message_is_never_empty() {
        assert_eq!(Envelope::failure("").message, FALLBACK_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_execute_and_normalize_folds_request_errors() {
        let envelope = execute_and_normalize(async {
            Err::<RawResponse, _>(Error::Request {
                message: "not found".to_string(),
                response: Box::new(response(
                    StatusCode::NOT_FOUND,
                    r#"{"message":"not found"}"#,
                )),
            })
        })
        .await
        .unwrap();

        assert!(!envelope.status);
        assert_eq!(envelope.message, "not found");
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn test_execute_and_normalize_propagates_transport_errors() {
        let result = execute_and_normalize(async {
            Err::<RawResponse, _>(Error::MaxRetriesExceeded {
                attempts: 3,
                last_error: Box::new(Error::Timeout),
            })
        })
        .await;

        assert!(matches!(
            result,
            Err(Error::MaxRetriesExceeded { attempts: 3, .. })
        ));
    }
}
