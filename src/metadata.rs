//! Request description and payload encoding.

use crate::{Error, Result};
use http::Method;
use serde::Serialize;
use serde_json::{Map, Value};

/// Flat key-value payload: query parameters for GET/DELETE, JSON body otherwise.
pub type Payload = Map<String, Value>;

/// A single request to send to Paystack.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// The HTTP method. Only GET, POST, PUT and DELETE are sent.
    pub method: Method,

    /// The request path, relative to the base URL.
    pub path: String,

    /// Query parameters or body, depending on the method.
    pub payload: Payload,
}

impl RequestMetadata {
    /// Creates a request with an empty payload.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            payload: Payload::new(),
        }
    }

    /// Replaces the payload.
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Returns `true` if the payload travels as a JSON body rather than a query
    /// string.
    pub fn sends_body(&self) -> bool {
        self.method == Method::POST || self.method == Method::PUT
    }

    /// Encodes the payload as query string pairs.
    ///
    /// Strings are sent verbatim, numbers and booleans as their JSON text, and
    /// arrays or objects as compact JSON. `null` entries are skipped.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.payload
            .iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), value))
            })
            .collect()
    }
}

/// Serializes any value into a [`Payload`].
///
/// `null` (including `()` and `None`) becomes an empty payload.
///
/// # Errors
///
/// Returns [`Error::SerializationFailed`] if the value does not serialize to a
/// JSON object.
///
/// # Examples
///
/// ```
/// use paystack::to_payload;
/// use serde_json::json;
///
/// let payload = to_payload(&json!({"email": "a@b.com", "amount": 10000})).unwrap();
/// assert_eq!(payload["amount"], 10000);
///
/// assert!(to_payload(&()).unwrap().is_empty());
/// assert!(to_payload(&[1, 2, 3]).is_err());
/// ```
pub fn to_payload<P>(value: &P) -> Result<Payload>
where
    P: Serialize + ?Sized,
{
    match serde_json::to_value(value).map_err(|e| Error::SerializationFailed(e.to_string()))? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Payload::new()),
        other => Err(Error::SerializationFailed(format!(
            "payload must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_pairs_encoding() {
        let payload = to_payload(&json!({
            "perPage": 50,
            "status": "success",
            "settled": true,
            "customer": null,
            "ids": [1, 2],
        }))
        .unwrap();
        let metadata = RequestMetadata::new(Method::GET, "transaction").with_payload(payload);

        let mut pairs = metadata.query_pairs();
        pairs.sort();

        assert_eq!(
            pairs,
            vec![
                ("ids".to_string(), "[1,2]".to_string()),
                ("perPage".to_string(), "50".to_string()),
                ("settled".to_string(), "true".to_string()),
                ("status".to_string(), "success".to_string()),
            ]
        );
    }

    #[test]
    fn test_sends_body_only_for_post_and_put() {
        assert!(RequestMetadata::new(Method::POST, "plan").sends_body());
        assert!(RequestMetadata::new(Method::PUT, "plan/1").sends_body());
        assert!(!RequestMetadata::new(Method::GET, "plan").sends_body());
        assert!(!RequestMetadata::new(Method::DELETE, "plan/1").sends_body());
    }

    #[test]
    fn test_to_payload_rejects_non_objects() {
        assert!(matches!(
            to_payload("just a string"),
            Err(Error::SerializationFailed(_))
        ));
        assert!(to_payload(&None::<u8>).unwrap().is_empty());
    }
}
