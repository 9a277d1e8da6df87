use serde::{Deserialize, Serialize};

/// One monitored token as reported by the market-data endpoint, with every
/// numeric field already coerced to a finite value or `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: Option<f64>,
    pub change_24h: Option<f64>,
    pub change_7d: Option<f64>,
    pub volume_24h: Option<f64>,
    pub liquidity: Option<f64>,
    /// 24h volatility, percent.
    pub volatility: Option<f64>,
    pub market_cap: Option<f64>,
    pub fdv: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub ath: Option<f64>,
    pub atl: Option<f64>,
}
