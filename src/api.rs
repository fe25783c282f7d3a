//! The [`Paystack`] entry point.

use crate::services::{
    BankService, CustomerService, PageService, PlanService, SubAccountService, SubscriptionService,
    TransactionService,
};
use crate::{Config, PaystackClient, Result, TransRef};

/// Entry point exposing every resource service.
///
/// Services are created on demand and share this instance's client.
///
/// # Examples
///
/// ```no_run
/// use paystack::{Config, Pagination, Paystack};
///
/// # async fn example() -> Result<(), paystack::Error> {
/// let paystack = Paystack::new(Config::builder("sk_test_xxx").build()?)?;
///
/// let customers = paystack.customer().list(&Pagination::new(50, 1)).await?;
/// let banks = paystack.bank().list(&()).await?;
/// println!("{} / {}", customers.message, banks.message);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Paystack {
    client: PaystackClient,
}

impl Paystack {
    /// Builds a client from `config`.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::from_client(PaystackClient::new(config)?))
    }

    /// Builds a client from `PAYSTACK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_client(PaystackClient::from_env()?))
    }

    /// Wraps an existing client.
    pub fn from_client(client: PaystackClient) -> Self {
        Self { client }
    }

    /// The shared client, for endpoints without a dedicated service.
    pub fn client(&self) -> &PaystackClient {
        &self.client
    }

    pub fn transaction(&self) -> TransactionService {
        TransactionService::new(self.client.clone())
    }

    pub fn customer(&self) -> CustomerService {
        CustomerService::new(self.client.clone())
    }

    pub fn plan(&self) -> PlanService {
        PlanService::new(self.client.clone())
    }

    pub fn subscription(&self) -> SubscriptionService {
        SubscriptionService::new(self.client.clone())
    }

    pub fn page(&self) -> PageService {
        PageService::new(self.client.clone())
    }

    pub fn sub_account(&self) -> SubAccountService {
        SubAccountService::new(self.client.clone())
    }

    pub fn bank(&self) -> BankService {
        BankService::new(self.client.clone())
    }

    /// Generates a unique transaction reference, see [`TransRef`].
    pub fn trans_ref(&self) -> String {
        TransRef::generate()
    }
}
