use serde::{Deserialize, Serialize};

/// One candidate swap route returned by the routing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub from_token: String,
    pub to_token: String,
    /// Input notional, USD.
    pub amount_usd: Option<f64>,
    /// Canonical display label of the best venue.
    pub dex: String,
    pub expected_output: Option<f64>,
    pub slippage_pct: Option<f64>,
    pub gas_cost_usd: Option<f64>,
    pub efficiency_pct: Option<f64>,
    pub price_impact_pct: Option<f64>,
    pub hops: Option<u32>,
    pub execution_time_secs: Option<f64>,
    pub path: Vec<String>,
}
