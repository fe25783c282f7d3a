//! Subscriptions: <https://paystack.com/docs/api/subscription/>

use super::dispatch;
use crate::{Envelope, PaystackClient, Result};
use http::Method;
use serde::Serialize;

/// Recurring billing of a customer on a plan.
#[derive(Debug, Clone)]
pub struct SubscriptionService {
    client: PaystackClient,
}

impl SubscriptionService {
    pub fn new(client: PaystackClient) -> Self {
        Self { client }
    }

    /// Subscribes a customer to a plan. Expects `customer` and `plan`.
    pub async fn create<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::POST, "subscription", payload).await
    }

    /// Lists subscriptions, optionally filtered by `customer` or `plan`.
    pub async fn list<P>(&self, params: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::GET, "subscription", params).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<Envelope> {
        let path = format!("subscription/{}", id_or_code);
        dispatch(&self.client, Method::GET, path, &()).await
    }

    /// Enables a subscription. Expects `code` and `token`.
    pub async fn enable<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = "subscription/enable";
        dispatch(&self.client, Method::POST, path, payload).await
    }

    /// Disables a subscription. Expects `code` and `token`.
    pub async fn disable<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = "subscription/disable";
        dispatch(&self.client, Method::POST, path, payload).await
    }

    /// Generates a link the customer can use to update their card.
    pub async fn generate_update_link(&self, code: &str) -> Result<Envelope> {
        let path = format!("subscription/{}/manage/link", code);
        dispatch(&self.client, Method::GET, path, &()).await
    }

    /// Emails the customer a link to update their card.
    pub async fn send_update_link(&self, code: &str) -> Result<Envelope> {
        let path = format!("subscription/{}/manage/email", code);
        dispatch(&self.client, Method::POST, path, &()).await
    }
}
