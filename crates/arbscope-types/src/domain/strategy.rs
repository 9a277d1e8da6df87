use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tier::{ExecutionStatus, StrategyStatus};

/// One scheduled accumulation (DCA) plan and its running totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRecord {
    pub id: String,
    pub token: String,
    pub status: StrategyStatus,
    pub plan: Option<String>,
    pub total_investment: Option<f64>,
    pub invested_so_far: Option<f64>,
    pub intervals_completed: Option<u32>,
    pub total_intervals: Option<u32>,
    pub avg_buy_price: Option<f64>,
    pub current_price: Option<f64>,
    pub total_tokens: Option<f64>,
    pub current_value: Option<f64>,
    pub pnl: Option<f64>,
    pub pnl_pct: Option<f64>,
    /// Seconds until the next scheduled buy; absent when the plan is idle.
    pub next_buy_in_secs: Option<f64>,
    pub frequency: Option<String>,
}

impl StrategyRecord {
    /// Completed fraction in [0, 1], when both interval counts are known.
    pub fn progress(&self) -> Option<f64> {
        let total = self.total_intervals? as f64;
        if total == 0.0 {
            return None;
        }
        Some((self.intervals_completed? as f64 / total).clamp(0.0, 1.0))
    }
}

/// One entry from the strategy execution log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub strategy: String,
    pub plan: Option<String>,
    pub token: String,
    pub action: String,
    pub amount_usd: Option<f64>,
    pub price: Option<f64>,
    pub tokens: Option<f64>,
    pub dex: String,
    pub status: ExecutionStatus,
    pub error: Option<String>,
    pub time: Option<DateTime<Utc>>,
}
