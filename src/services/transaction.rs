//! Transactions: <https://paystack.com/docs/api/transaction/>

use super::dispatch;
use crate::{Envelope, PaystackClient, Result};
use http::Method;
use serde::Serialize;
use std::fmt::Display;

/// Accepting payments, verifying them and reporting on them.
///
/// # Examples
///
/// ```no_run
/// use paystack::{InitializeTransaction, Paystack, TransRef};
///
/// # async fn example() -> Result<(), paystack::Error> {
/// let paystack = Paystack::from_env()?;
///
/// let envelope = paystack
///     .transaction()
///     .initialize(&InitializeTransaction::new("customer@email.com", 10000).reference(TransRef::generate()))
///     .await?;
///
/// if envelope.status {
///     println!("Redirect to {}", envelope.data.unwrap()["authorization_url"]);
/// } else {
///     eprintln!("Paystack refused: {}", envelope.message);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TransactionService {
    client: PaystackClient,
}

impl TransactionService {
    pub fn new(client: PaystackClient) -> Self {
        Self { client }
    }

    /// Starts a transaction. Requires at least `email` and `amount` (in subunits).
    pub async fn initialize<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = "transaction/initialize";
        dispatch(&self.client, Method::POST, path, payload).await
    }

    /// Confirms the status of a transaction by its reference.
    pub async fn verify(&self, reference: &str) -> Result<Envelope> {
        let path = format!("transaction/verify/{}", reference);
        dispatch(&self.client, Method::GET, path, &()).await
    }

    /// Lists transactions. Accepts filters such as `perPage`, `page`, `status`,
    /// `from` and `to`.
    pub async fn list<P>(&self, params: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::GET, "transaction", params).await
    }

    /// Fetches a single transaction by its numeric id.
    pub async fn fetch(&self, id: impl Display) -> Result<Envelope> {
        let path = format!("transaction/{}", id);
        dispatch(&self.client, Method::GET, path, &()).await
    }

    /// Charges a reusable authorization. Expects `email`, `amount` and
    /// `authorization_code`.
    pub async fn charge_authorization<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = "transaction/charge_authorization";
        dispatch(&self.client, Method::POST, path, payload).await
    }

    /// Returns the timeline of a transaction.
    pub async fn timeline(&self, id_or_reference: impl Display) -> Result<Envelope> {
        let path = format!("transaction/timeline/{}", id_or_reference);
        dispatch(&self.client, Method::GET, path, &()).await
    }

    /// Total amount received on the integration.
    pub async fn totals<P>(&self, params: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::GET, "transaction/totals", params).await
    }

    /// Requests a CSV export of transactions.
    pub async fn export<P>(&self, params: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::GET, "transaction/export", params).await
    }

    /// Recovers part of a payment from a customer. Expects `authorization_code`,
    /// `currency`, `amount` and `email`.
    pub async fn partial_debit<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = "transaction/partial_debit";
        dispatch(&self.client, Method::POST, path, payload).await
    }
}
