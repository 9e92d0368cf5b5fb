//! # INDX Rust SDK
//!
//! A Rust client for the INDX trading API.
//!
//! ## Features
//!
//! - **Trading API**: balances, instruments, history, order book, offers and ticks
//! - **Request Signing**: SHA-256/base64 signatures over each endpoint's ordered fields
//! - **Raw Responses**: every call returns the server's JSON body unchanged
//! - **Error Handling**: non-200 responses surface as [`IndxError::RequestFailed`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use indx_rust_sdk::{ApiClient, HistoryQuery, NewOffer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(
//!         "your_login",    // login
//!         "your_password", // password
//!         "123456789012",  // WMID
//!     )?;
//!
//!     // Instruments and last month's trades on tool 60
//!     let tools = client.tools().await?;
//!     let history = client.history_trading(HistoryQuery::default()).await?;
//!     println!("{}\n{}", tools, history);
//!
//!     // Place a bid for 3 contracts at 12.5
//!     let offer = NewOffer::new().with_count(3).with_price(12.5);
//!     println!("{}", client.offer_add(offer).await?);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod error;
pub mod signer;
pub mod types;

// Re-exports for convenience
pub use api::ApiClient;
pub use error::{IndxError, Result};
pub use signer::{Config, IndxSigner};
pub use types::*;
