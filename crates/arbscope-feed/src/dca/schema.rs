use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawStrategy {
    pub id: Value,
    pub token: Option<String>,
    pub status: Option<String>,
    pub plan: Option<String>,
    pub total_investment: Value,
    pub invested_so_far: Value,
    pub intervals_completed: Value,
    pub total_intervals: Value,
    pub avg_buy_price: Value,
    pub current_price: Value,
    pub total_tokens: Value,
    pub current_value: Value,
    pub pnl: Value,
    pub pnl_percentage: Value,
    pub next_buy_in: Value,
    pub frequency: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawExecution {
    pub strategy: Option<String>,
    pub plan: Option<String>,
    pub token: Option<String>,
    pub action: Option<String>,
    pub amount: Value,
    pub price: Value,
    pub tokens: Value,
    pub dex: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub time: Option<String>,
}
