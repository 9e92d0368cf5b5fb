//! Request envelopes for the INDX trade API
//!
//! Every request body carries an [`ApiContext`] plus at most one
//! operation-specific section. Field names are PascalCase on the wire.

use serde::Serialize;
use std::fmt;

use super::trading::{OfferParams, TickParams, TradingParams};

/// Trade API endpoints, relative to `<api_url>/trade/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Account balance
    Balance,
    /// Instrument list
    Tools,
    /// Trade history
    HistoryTrading,
    /// Transaction history
    HistoryTransaction,
    /// Own open offers
    OfferMy,
    /// Order book of an instrument
    OfferList,
    /// Place an offer
    OfferAdd,
    /// Cancel an offer
    OfferDelete,
    /// Price ticks
    Tick,
}

impl Endpoint {
    /// Path segment of the endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Balance => "Balance",
            Endpoint::Tools => "Tools",
            Endpoint::HistoryTrading => "HistoryTrading",
            Endpoint::HistoryTransaction => "HistoryTransaction",
            Endpoint::OfferMy => "OfferMy",
            Endpoint::OfferList => "OfferList",
            Endpoint::OfferAdd => "OfferAdd",
            Endpoint::OfferDelete => "OfferDelete",
            // The server routes this one in lower case
            Endpoint::Tick => "tick",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Authentication context sent with every request
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiContext {
    /// Account login
    pub login: String,
    /// WMID of the trading account
    pub wmid: String,
    /// Request culture, always `en-EN`
    pub culture: String,
    /// Base64 SHA-256 signature over the endpoint's ordered fields
    pub signature: String,
}

impl fmt::Debug for ApiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiContext")
            .field("login", &self.login)
            .field("wmid", &self.wmid)
            .field("culture", &self.culture)
            .field("signature", &"<redacted>")
            .finish()
    }
}

/// Envelope with no operation section (Balance, Tools, OfferMy)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContextRequest {
    /// Authentication context
    pub api_context: ApiContext,
}

/// Envelope carrying a `Trading` section (history and offer list)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradingRequest {
    /// Authentication context
    pub api_context: ApiContext,
    /// Instrument and optional date range
    pub trading: TradingParams,
}

/// Envelope carrying an `Offer` section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferRequest {
    /// Authentication context
    pub api_context: ApiContext,
    /// New offer
    pub offer: OfferParams,
}

/// Envelope carrying the offer ID to delete as a top-level scalar
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferDeleteRequest {
    /// Authentication context
    pub api_context: ApiContext,
    /// ID of the offer to cancel
    pub offer_id: u64,
}

/// Envelope carrying a `Tick` section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TickRequest {
    /// Authentication context
    pub api_context: ApiContext,
    /// Instrument and tick kind
    pub tick: TickParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> ApiContext {
        ApiContext {
            login: "user".to_string(),
            wmid: "123456789012".to_string(),
            culture: "en-EN".to_string(),
            signature: "c2lnbmF0dXJl".to_string(),
        }
    }

    #[test]
    fn test_context_request_shape() {
        let body = serde_json::to_value(ContextRequest { api_context: context() }).unwrap();
        assert_eq!(
            body,
            json!({
                "ApiContext": {
                    "Login": "user",
                    "Wmid": "123456789012",
                    "Culture": "en-EN",
                    "Signature": "c2lnbmF0dXJl"
                }
            })
        );
    }

    #[test]
    fn test_history_request_shape() {
        let request = TradingRequest {
            api_context: context(),
            trading: TradingParams::history(60, "20240101".to_string(), "20240201".to_string()),
        };
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(
            body["Trading"],
            json!({ "ID": 60, "DateStart": "20240101", "DateEnd": "20240201" })
        );
    }

    #[test]
    fn test_offer_list_request_has_only_id() {
        let request = TradingRequest {
            api_context: context(),
            trading: TradingParams::instrument(61),
        };
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(body["Trading"], json!({ "ID": 61 }));
    }

    #[test]
    fn test_offer_delete_request_shape() {
        let body = serde_json::to_value(OfferDeleteRequest {
            api_context: context(),
            offer_id: 987654,
        })
        .unwrap();
        assert_eq!(body["OfferId"], json!(987654));
        assert_eq!(body.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_tick_request_shape() {
        let body = serde_json::to_value(TickRequest {
            api_context: context(),
            tick: TickParams { id: 60, kind: 1 },
        })
        .unwrap();
        assert_eq!(body["Tick"], json!({ "ID": 60, "Kind": 1 }));
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Balance.as_str(), "Balance");
        assert_eq!(Endpoint::HistoryTransaction.to_string(), "HistoryTransaction");
        assert_eq!(Endpoint::Tick.as_str(), "tick");
    }

    #[test]
    fn test_context_debug_hides_signature() {
        let rendered = format!("{:?}", context());
        assert!(rendered.contains("123456789012"));
        assert!(!rendered.contains("c2lnbmF0dXJl"));
    }
}
