//! Get balance example
//!
//! This example demonstrates how to fetch the account balance and open offers

use indx_rust_sdk::ApiClient;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting INDX balance example");

    // Replace with your INDX credentials
    let client = ApiClient::new("your_login", "your_password", "123456789012")?;
    info!("Using WMID: {}", client.wmid());

    match client.balance().await {
        Ok(body) => info!("Balance: {}", body),
        Err(e) => error!("Failed to get balance: {}", e),
    }

    match client.offer_my().await {
        Ok(body) => info!("Open offers: {}", body),
        Err(e) => error!("Failed to get open offers: {}", e),
    }

    Ok(())
}
