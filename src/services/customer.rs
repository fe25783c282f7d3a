//! Customers: <https://paystack.com/docs/api/customer/>

use super::dispatch;
use crate::{Envelope, PaystackClient, Result};
use http::Method;
use serde::Serialize;

/// Customer records, identification and direct-debit authorizations.
#[derive(Debug, Clone)]
pub struct CustomerService {
    client: PaystackClient,
}

impl CustomerService {
    pub fn new(client: PaystackClient) -> Self {
        Self { client }
    }

    /// Creates a customer. Requires `email`.
    pub async fn create<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::POST, "customer", payload).await
    }

    /// Fetches a customer by email or customer code.
    pub async fn fetch(&self, email_or_code: &str) -> Result<Envelope> {
        let path = format!("customer/{}", email_or_code);
        dispatch(&self.client, Method::GET, path, &()).await
    }

    /// Lists customers, see [`Pagination`](crate::Pagination).
    pub async fn list<P>(&self, params: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::GET, "customer", params).await
    }

    /// Updates a customer's details.
    pub async fn update<P>(&self, code: &str, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = format!("customer/{}", code);
        dispatch(&self.client, Method::PUT, path, payload).await
    }

    /// Validates a customer's identity (bank account or BVN).
    pub async fn validate<P>(&self, code: &str, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = format!("customer/{}/identification", code);
        dispatch(&self.client, Method::POST, path, payload).await
    }

    /// Whitelists or blacklists a customer. Expects `customer` and
    /// `risk_action` (`default`, `allow` or `deny`).
    pub async fn set_risk_action<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = "customer/set_risk_action";
        dispatch(&self.client, Method::POST, path, payload).await
    }

    /// Starts a direct-debit authorization for a customer.
    pub async fn initialize_authorization<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = "customer/authorization/initialize";
        dispatch(&self.client, Method::POST, path, payload).await
    }

    /// Checks the outcome of a direct-debit authorization.
    pub async fn verify_authorization(&self, reference: &str) -> Result<Envelope> {
        let path = format!("customer/authorization/verify/{}", reference);
        dispatch(&self.client, Method::GET, path, &()).await
    }

    /// Deactivates a saved authorization. Expects `authorization_code`.
    pub async fn deactivate_authorization<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = "customer/authorization/deactivate";
        dispatch(&self.client, Method::POST, path, payload).await
    }
}
