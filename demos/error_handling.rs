//! Example demonstrating how failures surface.
//!
//! This example shows how to:
//! - Tell Paystack rejections (`status: false`) from transport errors
//! - Inspect the raw response behind a failure
//! - Observe retry exhaustion against an unreachable host
//!
//! Run with: `PAYSTACK_SECRET_KEY=sk_test_... cargo run --example error_handling`

use paystack::{Config, Error, Paystack, PaystackClient};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("paystack=info")
        .init();

    let paystack = Paystack::from_env()?;

    println!("=== Example 1: Paystack Rejections ===");
    // Unknown plans come back as an envelope, not an error
    let envelope = paystack.plan().fetch("PLN_does_not_exist").await?;
    if !envelope.is_success() {
        println!("  Rejected by Paystack");
    }
    println!("  Status: {}", envelope.status);
    println!("  Message: {}", envelope.message);
    println!("  Data: {:?}", envelope.data);
    println!();

    println!("=== Example 2: Raw Responses ===");
    // The client keeps the upstream response for diagnostics
    let client = paystack.client();
    match client
        .get("customer/CUS_does_not_exist", &paystack::Payload::new())
        .await
    {
        Ok(response) => println!("  Success: {}", response.body),
        Err(Error::Request { message, response }) => {
            println!("  Message: {}", message);
            println!("  Status code: {}", response.status.as_u16());
            println!("  Raw response: {}", response.body);
            println!("  Content-Type: {:?}", response.header("content-type"));
        }
        Err(e) => println!("  Other error: {}", e),
    }
    println!();

    println!("=== Example 3: Transport Failures ===");
    // Nothing listens on port 1, so every attempt fails to connect
    let unreachable = Config::builder(paystack.client().config().secret_key())
        .base_url("http://127.0.0.1:1")
        .retry_attempts(3)
        .retry_delay(Duration::from_millis(100))
        .build()?;
    let offline = Paystack::from_client(PaystackClient::new(unreachable)?);

    match offline.bank().list_countries().await {
        Ok(envelope) => println!("  Unexpected envelope: {:?}", envelope),
        Err(Error::MaxRetriesExceeded {
            attempts,
            last_error,
        }) => {
            println!("  Gave up after {} attempts", attempts);
            println!("  Last error: {}", last_error);
            println!("  Retryable: {}", last_error.is_retryable());
        }
        Err(e) => println!("  Other error: {}", e),
    }

    Ok(())
}
