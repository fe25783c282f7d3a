//! Typed request parameters for common calls.
//!
//! Every service method accepts any `Serialize` value that becomes a JSON
//! object, so `serde_json::json!` literals work everywhere. These types cover the
//! most frequent shapes.

use serde::Serialize;
use serde_json::Value;

/// Page selection for list endpoints.
///
/// # Examples
///
/// ```
/// use paystack::Pagination;
///
/// let params = paystack::to_payload(&Pagination::new(50, 2)).unwrap();
/// assert_eq!(params["perPage"], 50);
/// assert_eq!(params["page"], 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Records per page.
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// 1-indexed page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Pagination {
    /// Selects `page` with `per_page` records.
    pub fn new(per_page: u32, page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            page: Some(page),
        }
    }
}

/// Body for [`TransactionService::initialize`](crate::services::TransactionService::initialize).
///
/// `amount` is in the currency's subunit (kobo for NGN).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitializeTransaction {
    pub email: String,
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl InitializeTransaction {
    pub fn new(email: impl Into<String>, amount: u64) -> Self {
        Self {
            email: email.into(),
            amount,
            currency: None,
            reference: None,
            callback_url: None,
            plan: None,
            subaccount: None,
            channels: None,
            metadata: None,
        }
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the idempotency reference, see [`TransRef`](crate::TransRef).
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }

    pub fn subaccount(mut self, subaccount: impl Into<String>) -> Self {
        self.subaccount = Some(subaccount.into());
        self
    }

    pub fn channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels = Some(channels.into_iter().map(Into::into).collect());
        self
    }

    pub fn metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_payload;
    use serde_json::json;

    #[test]
    fn test_empty_pagination_sends_nothing() {
        assert!(to_payload(&Pagination::default()).unwrap().is_empty());
    }

    #[test]
    fn test_initialize_skips_unset_fields() {
        let payload = to_payload(
            &InitializeTransaction::new("a@b.com", 10000)
                .reference("TXN_1")
                .channels(["card", "bank"]),
        )
        .unwrap();

        assert_eq!(
            serde_json::Value::Object(payload),
            json!({
                "email": "a@b.com",
                "amount": 10000,
                "reference": "TXN_1",
                "channels": ["card", "bank"]
            })
        );
    }
}
