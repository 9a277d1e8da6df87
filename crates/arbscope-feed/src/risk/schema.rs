use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawRisk {
    pub id: Value,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub current_price: Value,
    pub stop_loss: Value,
    pub position_size: Value,
    pub risk_percentage: Value,
    pub volatility: Value,
    pub risk_score: Value,
    pub max_drawdown: Value,
    pub sharpe_ratio: Value,
    pub status: Option<String>,
}
