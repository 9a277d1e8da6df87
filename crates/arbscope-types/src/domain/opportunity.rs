use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tier::OpportunityStatus;

/// One detected cross-DEX arbitrage opportunity.
///
/// Exchange names are stored canonicalized; the quote side of the pair is
/// the stable quote asset when the feed names only the base token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    pub token_a: String,
    pub token_b: String,
    pub buy_dex: String,
    pub sell_dex: String,
    pub profit_usd: Option<f64>,
    pub profit_pct: Option<f64>,
    pub volume_24h: Option<f64>,
    pub gas_used: Option<f64>,
    pub execution_time_secs: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
    pub status: OpportunityStatus,
}
