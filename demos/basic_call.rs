//! Basic example: initialize a transaction, then verify it.
//!
//! This example shows how to:
//! - Build a client from `PAYSTACK_*` environment variables
//! - Generate a transaction reference
//! - Initialize and verify a transaction
//! - Read the response envelope
//!
//! Run with: `PAYSTACK_SECRET_KEY=sk_test_... cargo run --example basic_call`

use paystack::{Error, InitializeTransaction, Pagination, Paystack};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("paystack=debug,basic_call=info")
        .init();

    let paystack = Paystack::from_env()?;

    println!("=== Initialize Transaction ===");
    let reference = paystack.trans_ref();
    let payload = InitializeTransaction::new("customer@email.com", 10000)
        .currency("NGN")
        .reference(reference.clone());

    let envelope = paystack.transaction().initialize(&payload).await?;
    println!("Status: {}", envelope.status);
    println!("Message: {}", envelope.message);
    if let Some(data) = &envelope.data {
        println!("Authorization URL: {}", data["authorization_url"]);
    }
    println!();

    println!("=== Verify Transaction ===");
    let envelope = paystack.transaction().verify(&reference).await?;
    println!("Status: {}", envelope.status);
    println!("Message: {}", envelope.message);
    println!();

    println!("=== List Customers ===");
    let envelope = paystack.customer().list(&Pagination::new(5, 1)).await?;
    if let Some(customers) = envelope.data.as_ref().and_then(|data| data.as_array()) {
        for customer in customers {
            println!("  {}", customer["email"]);
        }
    }
    println!("Meta: {:?}", envelope.meta);

    Ok(())
}
