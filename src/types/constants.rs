//! Constants used throughout the INDX SDK

/// Default API endpoints
pub mod endpoints {
    /// INDX API base URL (v2)
    pub const INDX_API_URL: &str = "https://api.indx.market:443/api/v2";

    /// Path segment shared by every trading endpoint
    pub const TRADE_PATH: &str = "trade";
}

/// Request culture sent in every `ApiContext` and signed after the password
pub const INDX_API_CULTURE: &str = "en-EN";

/// Separator between signed fields
pub const SIGNATURE_SEPARATOR: &str = ";";

/// Default values applied when a caller leaves a parameter unset
pub mod defaults {
    /// Instrument used when no tool ID is given
    pub const DEFAULT_TOOL_ID: u32 = 60;

    /// Days between the default history start date and today
    pub const HISTORY_LOOKBACK_DAYS: i64 = 31;

    /// Default tick kind
    pub const DEFAULT_TICK_KIND: u32 = 1;

    /// Date format used by the history endpoints
    pub const DATE_FORMAT: &str = "%Y%m%d";
}
