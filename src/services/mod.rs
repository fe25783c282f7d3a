//! Resource services, one per Paystack API resource family.
//!
//! Each method issues exactly one HTTP call through the shared
//! [`PaystackClient`] and returns an [`Envelope`]. Upstream failures come back as
//! `status: false` envelopes; only transport exhaustion and caller mistakes are
//! returned as `Err`.

mod bank;
mod customer;
mod page;
mod plan;
mod subaccount;
mod subscription;
mod transaction;

pub use bank::BankService;
pub use customer::CustomerService;
pub use page::PageService;
pub use plan::PlanService;
pub use subaccount::SubAccountService;
pub use subscription::SubscriptionService;
pub use transaction::TransactionService;

use crate::{envelope::execute_and_normalize, to_payload, Envelope, PaystackClient, Result};
use http::Method;
use serde::Serialize;

/// Serializes `params`, sends them and normalizes the outcome.
async fn dispatch<P>(
    client: &PaystackClient,
    method: Method,
    path: impl Into<String>,
    params: &P,
) -> Result<Envelope>
where
    P: Serialize + ?Sized,
{
    let payload = to_payload(params)?;
    execute_and_normalize(client.request(method, path, &payload)).await
}
