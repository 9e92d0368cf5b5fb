//! REST API client for INDX

pub mod client;
pub mod utils;

pub use client::ApiClient;
