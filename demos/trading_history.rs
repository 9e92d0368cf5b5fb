//! Trading history example
//!
//! Lists instruments, then fetches trade and transaction history for
//! January 2024 and the default last-31-days window.

use chrono::NaiveDate;
use indx_rust_sdk::{ApiClient, HistoryQuery, TickQuery};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = ApiClient::new("your_login", "your_password", "123456789012")?;

    info!("Tools: {}", client.tools().await?);

    let january = HistoryQuery::new()
        .with_tool_id(60)
        .with_date_start(NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?)
        .with_date_end(NaiveDate::from_ymd_opt(2024, 1, 31).ok_or("bad date")?);
    info!("Trades in January: {}", client.history_trading(january).await?);

    let recent = client.history_transaction(HistoryQuery::default()).await?;
    info!("Transactions in the last 31 days: {}", recent);

    info!("Ticks: {}", client.tick(TickQuery::default()).await?);

    Ok(())
}
