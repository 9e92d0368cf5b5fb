//! API client for the INDX trade REST API

use crate::{
    api::utils::{resolve_date_range, today},
    error::{IndxError, Result},
    signer::{Config, IndxSigner},
    types::{api::*, trading::*},
};
use chrono::NaiveDate;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    redirect::Policy,
    Client as HttpClient, StatusCode,
};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// INDX API client
///
/// Every operation signs its parameters, sends one POST and returns the
/// raw JSON body on HTTP 200. Any other status becomes
/// [`IndxError::RequestFailed`]. Nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client
    http_client: HttpClient,
    /// Base URL and timeout
    config: Config,
    /// Signer holding the account credentials
    signer: IndxSigner,
}

impl ApiClient {
    /// Create a client for the production API
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use indx_rust_sdk::ApiClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = ApiClient::new("login", "password", "123456789012")?;
    ///     let balance = client.balance().await?;
    ///     println!("{}", balance);
    ///     Ok(())
    /// }
    /// ```
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        wmid: impl Into<String>,
    ) -> Result<Self> {
        Self::from_config(Config::new(login, password, wmid))
    }

    /// Create a client from a full configuration
    pub fn from_config(config: Config) -> Result<Self> {
        let mut builder = HttpClient::builder()
            // Fresh connection per request
            .pool_max_idle_per_host(0)
            .redirect(Policy::none());
        if let Some(timeout_secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| IndxError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            signer: IndxSigner::from_config(&config),
            config,
        })
    }

    /// Account login
    pub fn login(&self) -> &str {
        self.signer.login()
    }

    /// WMID of the trading account
    pub fn wmid(&self) -> &str {
        self.signer.wmid()
    }

    /// Client configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Make a POST request to a trade endpoint
    async fn post<T: Serialize>(&self, endpoint: Endpoint, payload: &T) -> Result<String> {
        let url = self.config.trade_url(endpoint.as_str());
        let body = serde_json::to_string(payload)?;

        debug!("POST {}", url);
        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!("{} responded with HTTP {}", endpoint, status.as_u16());

        if status == StatusCode::OK {
            Ok(text)
        } else {
            warn!("{} failed with HTTP {}", endpoint, status.as_u16());
            Err(IndxError::request_failed(status.as_u16(), text))
        }
    }

    // === Request builders ===

    fn account_request(&self) -> ContextRequest {
        ContextRequest {
            api_context: self.signer.context(self.signer.account_signature(&[])),
        }
    }

    fn tools_request(&self) -> ContextRequest {
        ContextRequest {
            api_context: self.signer.context(self.signer.public_signature()),
        }
    }

    fn history_request(&self, query: &HistoryQuery, today: NaiveDate) -> TradingRequest {
        let (date_start, date_end) = resolve_date_range(today, query.date_start, query.date_end);
        let tool_id = query.tool_id.to_string();
        let signature = self
            .signer
            .account_signature(&[tool_id.as_str(), date_start.as_str(), date_end.as_str()]);

        TradingRequest {
            api_context: self.signer.context(signature),
            trading: TradingParams::history(query.tool_id, date_start, date_end),
        }
    }

    fn offer_list_request(&self, query: &OfferListQuery) -> TradingRequest {
        let tool_id = query.tool_id.to_string();
        TradingRequest {
            api_context: self.signer.context(self.signer.account_signature(&[tool_id.as_str()])),
            trading: TradingParams::instrument(query.tool_id),
        }
    }

    fn offer_add_request(&self, offer: &NewOffer) -> OfferRequest {
        // Only the instrument is signed, not count, price or flags
        let tool_id = offer.tool_id.to_string();
        OfferRequest {
            api_context: self.signer.context(self.signer.account_signature(&[tool_id.as_str()])),
            offer: OfferParams::from(offer),
        }
    }

    fn offer_delete_request(&self, offer_id: u64) -> OfferDeleteRequest {
        let id = offer_id.to_string();
        OfferDeleteRequest {
            api_context: self.signer.context(self.signer.account_signature(&[id.as_str()])),
            offer_id,
        }
    }

    fn tick_request(&self, query: &TickQuery) -> TickRequest {
        let tool_id = query.tool_id.to_string();
        let kind = query.kind.to_string();
        TickRequest {
            api_context: self
                .signer
                .context(self.signer.account_signature(&[tool_id.as_str(), kind.as_str()])),
            tick: TickParams {
                id: query.tool_id,
                kind: query.kind,
            },
        }
    }

    // === Account API ===

    /// Get account balance
    pub async fn balance(&self) -> Result<String> {
        self.post(Endpoint::Balance, &self.account_request()).await
    }

    /// Get the list of tradable instruments
    ///
    /// This is the only endpoint whose signature does not include the WMID.
    pub async fn tools(&self) -> Result<String> {
        self.post(Endpoint::Tools, &self.tools_request()).await
    }

    // === History API ===

    /// Get trade history for an instrument
    ///
    /// Unset dates default to the last 31 days, ending today.
    pub async fn history_trading(&self, query: HistoryQuery) -> Result<String> {
        let request = self.history_request(&query, today());
        self.post(Endpoint::HistoryTrading, &request).await
    }

    /// Get transaction history for an instrument
    ///
    /// Unset dates default to the last 31 days, ending today.
    pub async fn history_transaction(&self, query: HistoryQuery) -> Result<String> {
        let request = self.history_request(&query, today());
        self.post(Endpoint::HistoryTransaction, &request).await
    }

    // === Trading API ===

    /// Get own open offers
    pub async fn offer_my(&self) -> Result<String> {
        self.post(Endpoint::OfferMy, &self.account_request()).await
    }

    /// Get the order book of an instrument
    pub async fn offer_list(&self, query: OfferListQuery) -> Result<String> {
        self.post(Endpoint::OfferList, &self.offer_list_request(&query))
            .await
    }

    /// Place an offer
    ///
    /// Fails with [`IndxError::InvalidParameter`] before signing if the
    /// price is NaN or infinite.
    pub async fn offer_add(&self, offer: NewOffer) -> Result<String> {
        offer.validate()?;
        debug!(
            "Placing {} offer on tool {}: {} @ {}",
            if offer.is_bid { "bid" } else { "ask" },
            offer.tool_id,
            offer.count,
            offer.price
        );
        self.post(Endpoint::OfferAdd, &self.offer_add_request(&offer))
            .await
    }

    /// Cancel an offer
    pub async fn offer_delete(&self, offer_id: u64) -> Result<String> {
        self.post(Endpoint::OfferDelete, &self.offer_delete_request(offer_id))
            .await
    }

    /// Get price ticks for an instrument
    pub async fn tick(&self, query: TickQuery) -> Result<String> {
        self.post(Endpoint::Tick, &self.tick_request(&query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_client() -> ApiClient {
        ApiClient::new("login", "pass", "wmid").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = create_test_client();
        assert_eq!(client.login(), "login");
        assert_eq!(client.wmid(), "wmid");
        assert_eq!(client.config().timeout_secs, None);
    }

    #[test]
    fn test_balance_and_offer_my_signature() {
        let client = create_test_client();
        let request = client.account_request();
        assert_eq!(
            request.api_context.signature,
            IndxSigner::sign(&["login", "pass", "en-EN", "wmid"])
        );
    }

    #[test]
    fn test_tools_request_keeps_wmid_in_context_only() {
        let client = create_test_client();
        let request = client.tools_request();
        assert_eq!(
            request.api_context.signature,
            IndxSigner::sign(&["login", "pass", "en-EN"])
        );
        assert_eq!(request.api_context.wmid, "wmid");
    }

    #[test]
    fn test_history_request_defaults() {
        let client = create_test_client();
        let request = client.history_request(&HistoryQuery::default(), date(2024, 5, 31));

        assert_eq!(
            serde_json::to_value(&request.trading).unwrap(),
            json!({ "ID": 60, "DateStart": "20240430", "DateEnd": "20240531" })
        );
        assert_eq!(
            request.api_context.signature,
            IndxSigner::sign(&["login;pass;en-EN;wmid;60;20240430;20240531"])
        );
    }

    #[test]
    fn test_history_request_explicit_dates() {
        let client = create_test_client();
        let query = HistoryQuery::new()
            .with_tool_id(61)
            .with_date_start(date(2023, 12, 1))
            .with_date_end(date(2023, 12, 31));
        let request = client.history_request(&query, date(2024, 5, 31));

        assert_eq!(request.trading.date_start.as_deref(), Some("20231201"));
        assert_eq!(request.trading.date_end.as_deref(), Some("20231231"));
        assert_eq!(
            request.api_context.signature,
            IndxSigner::sign(&["login;pass;en-EN;wmid;61;20231201;20231231"])
        );
    }

    #[test]
    fn test_offer_list_request() {
        let client = create_test_client();
        let request = client.offer_list_request(&OfferListQuery::default());
        assert_eq!(request.trading, TradingParams::instrument(60));
        assert_eq!(
            request.api_context.signature,
            IndxSigner::sign(&["login;pass;en-EN;wmid;60"])
        );
    }

    #[test]
    fn test_offer_add_signs_only_tool_id() {
        let client = create_test_client();
        let offer = NewOffer::new()
            .with_count(3)
            .with_price(12.5)
            .with_anonymous(false)
            .ask();
        let body = serde_json::to_value(client.offer_add_request(&offer)).unwrap();

        assert_eq!(
            body["Offer"],
            json!({ "ID": 60, "Count": 3, "IsAnonymous": false, "IsBid": false, "Price": 12.5 })
        );
        assert_eq!(
            body["ApiContext"]["Signature"],
            json!(IndxSigner::sign(&["login;pass;en-EN;wmid;60"]))
        );
    }

    #[test]
    fn test_offer_delete_request() {
        let client = create_test_client();
        let request = client.offer_delete_request(42);
        assert_eq!(request.offer_id, 42);
        assert_eq!(
            request.api_context.signature,
            IndxSigner::sign(&["login;pass;en-EN;wmid;42"])
        );
    }

    #[test]
    fn test_tick_request() {
        let client = create_test_client();
        let request = client.tick_request(&TickQuery::new(62, 2));
        assert_eq!(request.tick, TickParams { id: 62, kind: 2 });
        assert_eq!(
            request.api_context.signature,
            IndxSigner::sign(&["login;pass;en-EN;wmid;62;2"])
        );
    }
}
