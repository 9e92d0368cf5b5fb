//! Place offer example
//!
//! Places an ask on tool 60, shows the order book and cancels the offer
//! by the ID passed as the first argument (if any).

use indx_rust_sdk::{ApiClient, Config, IndxError, NewOffer, OfferListQuery};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::new("your_login", "your_password", "123456789012").with_timeout(30);
    let client = ApiClient::from_config(config)?;

    let offer = NewOffer::new()
        .with_tool_id(60)
        .with_count(3)
        .with_price(12.5)
        .with_anonymous(false)
        .ask();

    match client.offer_add(offer).await {
        Ok(body) => info!("Offer placed: {}", body),
        Err(IndxError::RequestFailed { status, body }) => {
            error!("Server rejected offer (HTTP {}): {}", status, body)
        }
        Err(e) => return Err(e.into()),
    }

    info!("Order book: {}", client.offer_list(OfferListQuery::new(60)).await?);

    if let Some(offer_id) = std::env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok()) {
        info!("Cancelled {}: {}", offer_id, client.offer_delete(offer_id).await?);
    }

    Ok(())
}
