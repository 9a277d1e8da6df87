use arbscope_types::num::to_num;
use arbscope_types::{RiskRecord, RiskStatus};

use super::schema::RawRisk;
use crate::convert::id_string;

pub(crate) fn map_risk(raw: RawRisk) -> RiskRecord {
    let symbol = raw
        .symbol
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("?")
        .to_string();

    RiskRecord {
        id: id_string(&raw.id, || symbol.to_ascii_lowercase()),
        name: raw
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&symbol)
            .to_string(),
        symbol,
        current_price: to_num(&raw.current_price),
        stop_loss: to_num(&raw.stop_loss),
        position_size: to_num(&raw.position_size),
        risk_pct: to_num(&raw.risk_percentage),
        volatility: to_num(&raw.volatility),
        risk_score: to_num(&raw.risk_score),
        max_drawdown: to_num(&raw.max_drawdown),
        sharpe_ratio: to_num(&raw.sharpe_ratio),
        status: RiskStatus::from_raw(raw.status.as_deref().unwrap_or("")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_risk_preserves_absent_score() {
        let raw: RawRisk = serde_json::from_value(json!({
            "id": "btc",
            "symbol": "BTC",
            "risk_score": null,
            "sharpe_ratio": "1.8",
            "status": "active"
        }))
        .unwrap();

        let risk = map_risk(raw);
        assert_eq!(risk.risk_score, None);
        assert_eq!(risk.sharpe_ratio, Some(1.8));
        assert_eq!(risk.status, RiskStatus::Active);
    }

    #[test]
    fn test_map_risk_status_fallback() {
        let raw: RawRisk = serde_json::from_value(json!({"symbol": "DOGE"})).unwrap();
        assert_eq!(map_risk(raw).status, RiskStatus::Unknown);

        let raw: RawRisk =
            serde_json::from_value(json!({"symbol": "DOGE", "status": "high_risk"})).unwrap();
        assert_eq!(map_risk(raw).status, RiskStatus::HighRisk);
    }
}
