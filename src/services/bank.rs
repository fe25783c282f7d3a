//! Banks and countries: <https://paystack.com/docs/api/miscellaneous/>

use super::dispatch;
use crate::{Envelope, PaystackClient, Result};
use http::Method;
use serde::Serialize;
use serde_json::{json, Value};

/// Bank lists, supported countries and account resolution.
#[derive(Debug, Clone)]
pub struct BankService {
    client: PaystackClient,
}

impl BankService {
    pub fn new(client: PaystackClient) -> Self {
        Self { client }
    }

    /// Lists supported banks. Accepts filters such as `country` and `currency`.
    pub async fn list<P>(&self, params: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::GET, "bank", params).await
    }

    /// Lists the countries Paystack supports.
    pub async fn list_countries(&self) -> Result<Envelope> {
        dispatch(&self.client, Method::GET, "country", &()).await
    }

    /// Lists the states of a country, for address verification.
    pub async fn list_states(&self, country: impl Into<Value>) -> Result<Envelope> {
        let params = json!({ "country": country.into() });
        let path = "address_verification/states";
        dispatch(&self.client, Method::GET, path, &params).await
    }

    /// Confirms the holder of a bank account.
    pub async fn resolve_account(&self, account_number: &str, bank_code: &str) -> Result<Envelope> {
        let params = json!({
            "account_number": account_number,
            "bank_code": bank_code,
        });
        dispatch(&self.client, Method::GET, "bank/resolve", &params).await
    }
}
