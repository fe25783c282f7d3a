//! Plans: <https://paystack.com/docs/api/plan/>

use super::dispatch;
use crate::{Envelope, PaystackClient, Result};
use http::Method;
use serde::Serialize;

/// Subscription plans.
#[derive(Debug, Clone)]
pub struct PlanService {
    client: PaystackClient,
}

impl PlanService {
    pub fn new(client: PaystackClient) -> Self {
        Self { client }
    }

    /// Creates a plan. Expects `name`, `amount` and `interval`.
    pub async fn create<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::POST, "plan", payload).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<Envelope> {
        let path = format!("plan/{}", id_or_code);
        dispatch(&self.client, Method::GET, path, &()).await
    }

    pub async fn list<P>(&self, params: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::GET, "plan", params).await
    }

    pub async fn update<P>(&self, id_or_code: &str, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = format!("plan/{}", id_or_code);
        dispatch(&self.client, Method::PUT, path, payload).await
    }
}
