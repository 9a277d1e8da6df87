use serde::Deserialize;
use serde_json::Value;

/// Wire shape of one opportunity. The detector names only the base token;
/// the quote side is implicitly the stable quote asset.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawOpportunity {
    pub token: Option<String>,
    pub buy_exchange: Option<String>,
    pub sell_exchange: Option<String>,
    pub profit_usd: Value,
    pub profit_percentage: Value,
    pub volume_24h: Value,
    pub gas_used: Value,
    pub execution_time: Value,
    pub timestamp: Option<String>,
    pub status: Option<String>,
}
