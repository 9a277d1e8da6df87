use serde::Deserialize;
use serde_json::Value;

/// Wire shape of one route. `best_dex` may carry the literal string
/// "Unknown" when the router could not attribute a venue, in which case
/// `source` names the aggregator that produced the quote.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawRoute {
    pub from_token: Option<String>,
    pub to_token: Option<String>,
    pub amount: Value,
    pub best_dex: Option<String>,
    pub source: Option<String>,
    pub expected_output: Value,
    pub slippage: Value,
    pub gas_cost_usd: Value,
    pub efficiency: Value,
    pub price_impact: Value,
    pub route_hops: Value,
    pub execution_time: Value,
    pub path: Vec<Value>,
}
