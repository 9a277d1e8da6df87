use serde::Deserialize;
use serde_json::Value;

/// Wire shape of one token record. Numeric fields arrive as numbers,
/// numeric strings, or nulls depending on the upstream price source, so
/// they are held as raw values until coercion.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawToken {
    pub id: Value,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub price: Value,
    pub change_24h: Value,
    pub change_7d: Value,
    pub volume_24h: Value,
    pub liquidity: Value,
    pub volatility: Value,
    pub market_cap: Value,
    pub fdv: Value,
    pub circulating_supply: Value,
    pub total_supply: Value,
    pub ath: Value,
    pub atl: Value,
}
