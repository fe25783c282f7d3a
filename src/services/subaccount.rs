//! Subaccounts: <https://paystack.com/docs/api/subaccount/>

use super::dispatch;
use crate::{Envelope, PaystackClient, Result};
use http::Method;
use serde::Serialize;

/// Subaccounts used for split payments.
#[derive(Debug, Clone)]
pub struct SubAccountService {
    client: PaystackClient,
}

impl SubAccountService {
    pub fn new(client: PaystackClient) -> Self {
        Self { client }
    }

    /// Creates a subaccount. Expects `business_name`, `settlement_bank`,
    /// `account_number` and `percentage_charge`.
    pub async fn create<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::POST, "subaccount", payload).await
    }

    pub async fn list<P>(&self, params: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::GET, "subaccount", params).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<Envelope> {
        let path = format!("subaccount/{}", id_or_code);
        dispatch(&self.client, Method::GET, path, &()).await
    }

    pub async fn update<P>(&self, id_or_code: &str, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = format!("subaccount/{}", id_or_code);
        dispatch(&self.client, Method::PUT, path, payload).await
    }
}
