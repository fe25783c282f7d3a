//! # Paystack - a typed client for the Paystack payments API
//!
//! This crate wraps the Paystack REST API (transactions, customers, plans,
//! subscriptions, payment pages, subaccounts and banks) behind one shared,
//! retry-aware HTTP client. Every service call returns the same [`Envelope`]:
//! `{ status, message, data }`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use paystack::{Config, InitializeTransaction, Paystack};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), paystack::Error> {
//!     let config = Config::builder("sk_test_xxx")
//!         .retry_attempts(3)
//!         .retry_delay(Duration::from_millis(150))
//!         .build()?;
//!     let paystack = Paystack::new(config)?;
//!
//!     let reference = paystack.trans_ref();
//!     let envelope = paystack
//!         .transaction()
//!         .initialize(&InitializeTransaction::new("customer@email.com", 10000).reference(reference))
//!         .await?;
//!
//!     if envelope.status {
//!         println!("Pay at {}", envelope.data.unwrap()["authorization_url"]);
//!     } else {
//!         println!("Failed: {}", envelope.message);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Uniform envelopes** - Paystack rejections come back as `status: false`
//!   instead of errors
//! - **Transport retries** - Connection failures and timeouts are retried with a
//!   fixed delay; Paystack answers never are
//! - **Bearer authentication** - The secret key is attached to every request and
//!   redacted from `Debug` output
//! - **Structured logging** - Requests, responses and failures are logged with
//!   `tracing`
//! - **Raw access** - [`PaystackClient`] exposes the raw response for endpoints
//!   without a dedicated service
//!
//! ## Error Handling
//!
//! Service methods only return `Err` for transport exhaustion and caller
//! mistakes:
//!
//! ```no_run
//! use paystack::{Error, Paystack};
//!
//! # async fn example() -> Result<(), Error> {
//! # let paystack = Paystack::from_env()?;
//! match paystack.plan().fetch("PLN_missing").await {
//!     Ok(envelope) if envelope.status => println!("Plan: {:?}", envelope.data),
//!     Ok(envelope) => println!("Paystack said: {}", envelope.message),
//!     Err(Error::MaxRetriesExceeded { attempts, last_error }) => {
//!         eprintln!("Gave up after {} attempts: {}", attempts, last_error);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod config;
mod envelope;
mod error;
pub mod metadata;
mod params;
mod reference;
mod response;
pub mod retry;
pub mod services;

pub use api::Paystack;
pub use client::PaystackClient;
pub use config::{Config, ConfigBuilder, DEFAULT_BASE_URL};
pub use envelope::{
    execute_and_normalize, Envelope, DEFAULT_SUCCESS_MESSAGE, FALLBACK_FAILURE_MESSAGE,
};
pub use error::{Error, Result};
pub use metadata::{to_payload, Payload};
pub use params::{InitializeTransaction, Pagination};
pub use reference::TransRef;
pub use response::RawResponse;
pub use retry::RetryPolicy;
