use arbscope_types::num::to_num;
use arbscope_types::{dex, OpportunityRecord, OpportunityStatus};

use super::schema::RawOpportunity;
use crate::convert::parse_timestamp;

/// Quote asset assumed when the detector reports only the base token.
const QUOTE_ASSET: &str = "USDT";

pub(crate) fn map_opportunity(raw: RawOpportunity) -> OpportunityRecord {
    // A record fresh off the detector carries no status field yet.
    let status = match raw.status.as_deref() {
        Some(s) => OpportunityStatus::from_raw(s),
        None => OpportunityStatus::Detected,
    };

    OpportunityRecord {
        token_a: raw
            .token
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("?")
            .to_string(),
        token_b: QUOTE_ASSET.to_string(),
        buy_dex: dex::canonicalize_opt(raw.buy_exchange.as_deref()),
        sell_dex: dex::canonicalize_opt(raw.sell_exchange.as_deref()),
        profit_usd: to_num(&raw.profit_usd),
        profit_pct: to_num(&raw.profit_percentage),
        volume_24h: to_num(&raw.volume_24h),
        gas_used: to_num(&raw.gas_used),
        execution_time_secs: to_num(&raw.execution_time),
        timestamp: parse_timestamp(raw.timestamp.as_deref()),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_opportunity_defaults_to_detected() {
        let raw: RawOpportunity = serde_json::from_value(json!({
            "token": "ETH",
            "buy_exchange": "uniswap_v3",
            "sell_exchange": "sushi",
            "profit_usd": "12.40",
            "profit_percentage": 0.8
        }))
        .unwrap();

        let opp = map_opportunity(raw);
        assert_eq!(opp.status, OpportunityStatus::Detected);
        assert_eq!(opp.buy_dex, "Uniswap V3");
        assert_eq!(opp.sell_dex, "SushiSwap");
        assert_eq!(opp.profit_usd, Some(12.40));
        assert_eq!(opp.token_b, "USDT");
        assert_eq!(opp.timestamp, None);
    }

    #[test]
    fn test_map_opportunity_unknown_status_survives() {
        let raw: RawOpportunity =
            serde_json::from_value(json!({"token": "SOL", "status": "vanished"})).unwrap();
        assert_eq!(map_opportunity(raw).status, OpportunityStatus::Unknown);
    }
}
