//! Aggregates derived from one tick's normalized records.

use arbscope_types::num::{self, MagnitudeKind};
use arbscope_types::{
    OpportunityRecord, OpportunityStatus, RiskRecord, StrategyRecord, StrategyStatus, TokenRecord,
};
use serde::Serialize;

/// One token whose volatility crossed the alert threshold this tick.
#[derive(Debug, Clone, Serialize)]
pub struct VolatilityAlert {
    pub symbol: String,
    pub name: String,
    pub volatility_pct: f64,
    pub volatility_display: String,
}

/// Headline numbers for the overview screen, recomputed per tick from the
/// normalized records rather than trusted from a separate endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub tracked_tokens: usize,
    pub total_volume_24h_display: String,
    pub active_strategies: usize,
    pub total_strategies: usize,
    pub detected_opportunities: usize,
    pub executed_profit_usd: f64,
    pub executed_profit_display: String,
    pub volatility_alerts: Vec<VolatilityAlert>,
}

impl DashboardSummary {
    pub fn compute(
        tokens: &[TokenRecord],
        opportunities: &[OpportunityRecord],
        risk: &[RiskRecord],
        strategies: &[StrategyRecord],
        volatility_alert_pct: f64,
    ) -> Self {
        let total_volume_24h: f64 = tokens.iter().filter_map(|t| t.volume_24h).sum();

        let detected = opportunities
            .iter()
            .filter(|o| o.status == OpportunityStatus::Detected)
            .count();

        let executed_profit_usd: f64 = opportunities
            .iter()
            .filter(|o| o.status == OpportunityStatus::Executed)
            .filter_map(|o| o.profit_usd)
            .sum();

        // Alerts come off the risk feed, which carries volatility for
        // every monitored position even when market data lags.
        let volatility_alerts = risk
            .iter()
            .filter_map(|r| {
                let vol = r.volatility?;
                (vol > volatility_alert_pct).then(|| VolatilityAlert {
                    symbol: r.symbol.clone(),
                    name: r.name.clone(),
                    volatility_pct: vol,
                    volatility_display: num::fmt_pct(Some(vol), 1),
                })
            })
            .collect();

        Self {
            tracked_tokens: tokens.len(),
            total_volume_24h_display: num::format_magnitude(
                total_volume_24h,
                MagnitudeKind::Currency,
            ),
            active_strategies: strategies
                .iter()
                .filter(|s| s.status == StrategyStatus::Active)
                .count(),
            total_strategies: strategies.len(),
            detected_opportunities: detected,
            executed_profit_usd,
            executed_profit_display: num::fmt_currency(Some(executed_profit_usd)),
            volatility_alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbscope_types::{OpportunityStatus, RiskStatus};

    fn opportunity(status: OpportunityStatus, profit: Option<f64>) -> OpportunityRecord {
        OpportunityRecord {
            token_a: "ETH".into(),
            token_b: "USDT".into(),
            buy_dex: "Uniswap V3".into(),
            sell_dex: "SushiSwap".into(),
            profit_usd: profit,
            profit_pct: None,
            volume_24h: None,
            gas_used: None,
            execution_time_secs: None,
            timestamp: None,
            status,
        }
    }

    fn risk(symbol: &str, volatility: Option<f64>) -> RiskRecord {
        RiskRecord {
            id: symbol.to_lowercase(),
            symbol: symbol.into(),
            name: symbol.into(),
            current_price: None,
            stop_loss: None,
            position_size: None,
            risk_pct: None,
            volatility,
            risk_score: None,
            max_drawdown: None,
            sharpe_ratio: None,
            status: RiskStatus::Active,
        }
    }

    #[test]
    fn test_summary_counts_and_profit() {
        let opportunities = vec![
            opportunity(OpportunityStatus::Detected, Some(10.0)),
            opportunity(OpportunityStatus::Executed, Some(4.5)),
            opportunity(OpportunityStatus::Executed, None),
            opportunity(OpportunityStatus::Failed, Some(99.0)),
        ];
        let risk = vec![risk("DOGE", Some(19.4)), risk("BTC", Some(3.0)), risk("NEW", None)];

        let summary = DashboardSummary::compute(&[], &opportunities, &risk, &[], 15.0);
        assert_eq!(summary.detected_opportunities, 1);
        assert_eq!(summary.executed_profit_usd, 4.5);
        assert_eq!(summary.volatility_alerts.len(), 1);
        assert_eq!(summary.volatility_alerts[0].symbol, "DOGE");
    }
}
