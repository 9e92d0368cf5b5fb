//! Trading parameters for the INDX API
//!
//! Caller-facing query types carry the documented defaults through
//! [`Default`]; the `*Params` types are the wire sections sent inside a
//! request envelope.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{IndxError, Result};

use super::constants::defaults::{DEFAULT_TICK_KIND, DEFAULT_TOOL_ID};

/// `Trading` section used by the history and offer list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradingParams {
    /// Instrument ID
    #[serde(rename = "ID")]
    pub id: u32,
    /// First day of the range, `YYYYMMDD`
    #[serde(rename = "DateStart", skip_serializing_if = "Option::is_none")]
    pub date_start: Option<String>,
    /// Last day of the range, `YYYYMMDD`
    #[serde(rename = "DateEnd", skip_serializing_if = "Option::is_none")]
    pub date_end: Option<String>,
}

impl TradingParams {
    /// Section naming only an instrument
    pub fn instrument(id: u32) -> Self {
        Self {
            id,
            date_start: None,
            date_end: None,
        }
    }

    /// Section naming an instrument and an already formatted date range
    pub fn history(id: u32, date_start: String, date_end: String) -> Self {
        Self {
            id,
            date_start: Some(date_start),
            date_end: Some(date_end),
        }
    }
}

/// `Offer` section of an OfferAdd request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferParams {
    /// Instrument ID
    #[serde(rename = "ID")]
    pub id: u32,
    /// Number of contracts
    #[serde(rename = "Count")]
    pub count: u64,
    /// Hide the account from the order book
    #[serde(rename = "IsAnonymous")]
    pub is_anonymous: bool,
    /// Buy (`true`) or sell (`false`)
    #[serde(rename = "IsBid")]
    pub is_bid: bool,
    /// Limit price
    #[serde(rename = "Price")]
    pub price: f64,
}

impl From<&NewOffer> for OfferParams {
    fn from(offer: &NewOffer) -> Self {
        Self {
            id: offer.tool_id,
            count: offer.count,
            is_anonymous: offer.is_anonymous,
            is_bid: offer.is_bid,
            price: offer.price,
        }
    }
}

/// `Tick` section of a tick request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickParams {
    /// Instrument ID
    #[serde(rename = "ID")]
    pub id: u32,
    /// Tick kind
    #[serde(rename = "Kind")]
    pub kind: u32,
}

/// Parameters for the HistoryTrading and HistoryTransaction endpoints
///
/// Unset dates are resolved when the request is made: the start defaults
/// to 31 days before today and the end to today, in the local timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Instrument ID (default 60)
    pub tool_id: u32,
    /// First day of the range
    pub date_start: Option<NaiveDate>,
    /// Last day of the range
    pub date_end: Option<NaiveDate>,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            tool_id: DEFAULT_TOOL_ID,
            date_start: None,
            date_end: None,
        }
    }
}

impl HistoryQuery {
    /// Create a query with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the instrument
    pub fn with_tool_id(mut self, tool_id: u32) -> Self {
        self.tool_id = tool_id;
        self
    }

    /// Set the first day of the range
    pub fn with_date_start(mut self, date_start: NaiveDate) -> Self {
        self.date_start = Some(date_start);
        self
    }

    /// Set the last day of the range
    pub fn with_date_end(mut self, date_end: NaiveDate) -> Self {
        self.date_end = Some(date_end);
        self
    }
}

/// Parameters for the OfferList endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferListQuery {
    /// Instrument ID (default 60)
    pub tool_id: u32,
}

impl Default for OfferListQuery {
    fn default() -> Self {
        Self {
            tool_id: DEFAULT_TOOL_ID,
        }
    }
}

impl OfferListQuery {
    /// Query the order book of an instrument
    pub fn new(tool_id: u32) -> Self {
        Self { tool_id }
    }
}

/// A new offer for the OfferAdd endpoint
///
/// Defaults: tool 60, count 0, anonymous, bid, price 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewOffer {
    /// Instrument ID
    pub tool_id: u32,
    /// Number of contracts
    pub count: u64,
    /// Hide the account from the order book
    pub is_anonymous: bool,
    /// Buy (`true`) or sell (`false`)
    pub is_bid: bool,
    /// Limit price
    pub price: f64,
}

impl Default for NewOffer {
    fn default() -> Self {
        Self {
            tool_id: DEFAULT_TOOL_ID,
            count: 0,
            is_anonymous: true,
            is_bid: true,
            price: 0.0,
        }
    }
}

impl NewOffer {
    /// Create a bid with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the instrument
    pub fn with_tool_id(mut self, tool_id: u32) -> Self {
        self.tool_id = tool_id;
        self
    }

    /// Set the number of contracts
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    /// Set the limit price
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Show or hide the account in the order book
    pub fn with_anonymous(mut self, is_anonymous: bool) -> Self {
        self.is_anonymous = is_anonymous;
        self
    }

    /// Make this a bid
    pub fn bid(mut self) -> Self {
        self.is_bid = true;
        self
    }

    /// Make this an ask
    pub fn ask(mut self) -> Self {
        self.is_bid = false;
        self
    }

    /// Check the offer can be encoded; JSON has no NaN or infinity
    pub fn validate(&self) -> Result<()> {
        if !self.price.is_finite() {
            return Err(IndxError::invalid_parameter("Price must be finite"));
        }
        Ok(())
    }
}

/// Parameters for the tick endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickQuery {
    /// Instrument ID (default 60)
    pub tool_id: u32,
    /// Tick kind (default 1)
    pub kind: u32,
}

impl Default for TickQuery {
    fn default() -> Self {
        Self {
            tool_id: DEFAULT_TOOL_ID,
            kind: DEFAULT_TICK_KIND,
        }
    }
}

impl TickQuery {
    /// Query ticks of a given kind for an instrument
    pub fn new(tool_id: u32, kind: u32) -> Self {
        Self { tool_id, kind }
    }
}
