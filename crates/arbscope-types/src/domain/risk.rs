use serde::{Deserialize, Serialize};

use crate::tier::RiskStatus;

/// Position sizing and risk metrics for one monitored token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    pub stop_loss: Option<f64>,
    pub position_size: Option<f64>,
    /// Percent of the position risked before the stop triggers.
    pub risk_pct: Option<f64>,
    pub volatility: Option<f64>,
    /// Composite score in [0, 1]; absent when upstream could not compute it.
    pub risk_score: Option<f64>,
    pub max_drawdown: Option<f64>,
    pub sharpe_ratio: Option<f64>,
    pub status: RiskStatus,
}
