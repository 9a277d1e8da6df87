//! Per-endpoint view rows: one record's normalized values, tiers, and
//! preformatted strings, ready for a renderer to print verbatim.

use arbscope_types::num::{self, MagnitudeKind};
use arbscope_types::{
    ClassifyDefaults, ExecutionRecord, ExecutionStatus, OpportunityRecord, OpportunityStatus,
    RiskRecord, RiskStatus, RouteRecord, StrategyRecord, StrategyStatus, Thresholds, Tier,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::table::TableRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSortKey {
    Price,
    Change24h,
    Volume24h,
    MarketCap,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenRow {
    pub symbol: String,
    pub name: String,
    pub price: Option<f64>,
    pub price_display: String,
    pub ath_display: String,
    pub change_24h: Option<f64>,
    pub change_24h_display: String,
    pub change_7d_display: String,
    pub volume_24h: Option<f64>,
    pub volume_display: String,
    pub liquidity_display: String,
    pub volatility_display: String,
    pub volatility_tier: Tier,
    pub market_cap: Option<f64>,
    pub market_cap_display: String,
    pub fdv_display: String,
    pub supply_display: String,
}

impl TokenRow {
    pub fn from_record(record: &arbscope_types::TokenRecord, defaults: &ClassifyDefaults) -> Self {
        Self {
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            price: record.price,
            price_display: num::fmt_currency(record.price),
            ath_display: num::fmt_currency(record.ath),
            change_24h: record.change_24h,
            change_24h_display: num::fmt_signed_pct(record.change_24h, 2),
            change_7d_display: num::fmt_signed_pct(record.change_7d, 2),
            volume_24h: record.volume_24h,
            volume_display: magnitude(record.volume_24h, MagnitudeKind::Currency),
            liquidity_display: magnitude(record.liquidity, MagnitudeKind::Currency),
            volatility_display: num::fmt_pct(record.volatility, 1),
            volatility_tier: Thresholds::VOLATILITY_PCT
                .classify_or(record.volatility, defaults.volatility),
            market_cap: record.market_cap,
            market_cap_display: magnitude(record.market_cap, MagnitudeKind::Currency),
            fdv_display: magnitude(record.fdv, MagnitudeKind::Currency),
            supply_display: magnitude(record.circulating_supply, MagnitudeKind::Count),
        }
    }
}

impl TableRow for TokenRow {
    type SortKey = TokenSortKey;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.symbol, &self.name]
    }

    fn sort_value(&self, key: TokenSortKey) -> Option<f64> {
        match key {
            TokenSortKey::Price => self.price,
            TokenSortKey::Change24h => self.change_24h,
            TokenSortKey::Volume24h => self.volume_24h,
            TokenSortKey::MarketCap => self.market_cap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunitySortKey {
    ProfitUsd,
    ProfitPct,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpportunityRow {
    pub pair: String,
    pub buy_dex: String,
    pub sell_dex: String,
    pub profit_usd: Option<f64>,
    pub profit_display: String,
    pub profit_pct: Option<f64>,
    pub profit_pct_display: String,
    pub volume_display: String,
    pub gas_display: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub status: OpportunityStatus,
}

impl OpportunityRow {
    pub fn from_record(record: &OpportunityRecord) -> Self {
        Self {
            pair: format!("{}/{}", record.token_a, record.token_b),
            buy_dex: record.buy_dex.clone(),
            sell_dex: record.sell_dex.clone(),
            profit_usd: record.profit_usd,
            profit_display: num::fmt_currency(record.profit_usd),
            profit_pct: record.profit_pct,
            profit_pct_display: num::fmt_pct(record.profit_pct, 2),
            volume_display: magnitude(record.volume_24h, MagnitudeKind::Currency),
            gas_display: num::fmt_f64(record.gas_used, 0),
            timestamp: record.timestamp,
            status: record.status,
        }
    }
}

impl TableRow for OpportunityRow {
    type SortKey = OpportunitySortKey;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.pair, &self.buy_dex, &self.sell_dex]
    }

    fn sort_value(&self, key: OpportunitySortKey) -> Option<f64> {
        match key {
            OpportunitySortKey::ProfitUsd => self.profit_usd,
            OpportunitySortKey::ProfitPct => self.profit_pct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSortKey {
    RiskScore,
    Volatility,
    SharpeRatio,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskRow {
    pub symbol: String,
    pub name: String,
    pub price_display: String,
    pub stop_loss_display: String,
    pub risk_pct_display: String,
    pub position_display: String,
    pub drawdown_display: String,
    pub volatility: Option<f64>,
    pub volatility_display: String,
    pub risk_score: Option<f64>,
    pub risk_score_display: String,
    pub risk_tier: Tier,
    pub sharpe_ratio: Option<f64>,
    pub sharpe_display: String,
    /// Sharpe above 1 reads as healthy risk-adjusted return.
    pub sharpe_healthy: bool,
    pub status: RiskStatus,
}

impl RiskRow {
    pub fn from_record(record: &RiskRecord, defaults: &ClassifyDefaults) -> Self {
        Self {
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            price_display: num::fmt_currency(record.current_price),
            stop_loss_display: num::fmt_currency(record.stop_loss),
            risk_pct_display: num::fmt_pct(record.risk_pct, 0),
            position_display: num::fmt_f64(record.position_size, 2),
            drawdown_display: num::fmt_pct(record.max_drawdown, 1),
            volatility: record.volatility,
            volatility_display: num::fmt_pct(record.volatility, 1),
            risk_score: record.risk_score,
            risk_score_display: num::fmt_f64(record.risk_score, 2),
            risk_tier: Thresholds::RISK_SCORE.classify_or(record.risk_score, defaults.risk),
            sharpe_ratio: record.sharpe_ratio,
            sharpe_display: num::fmt_f64(record.sharpe_ratio, 2),
            sharpe_healthy: record.sharpe_ratio.is_some_and(|s| s > 1.0),
            status: record.status,
        }
    }
}

impl TableRow for RiskRow {
    type SortKey = RiskSortKey;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.symbol, &self.name]
    }

    fn sort_value(&self, key: RiskSortKey) -> Option<f64> {
        match key {
            RiskSortKey::RiskScore => self.risk_score,
            RiskSortKey::Volatility => self.volatility,
            RiskSortKey::SharpeRatio => self.sharpe_ratio,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteRow {
    pub pair: String,
    pub dex: String,
    pub amount_display: String,
    pub expected_display: String,
    pub gas_tier: Tier,
    pub gas_display: String,
    pub slippage_display: String,
    /// Set when slippage exceeds the configured warning level.
    pub slippage_warning: bool,
    pub efficiency_tier: Tier,
    pub efficiency_display: String,
    pub hops_display: String,
    pub time_display: String,
    pub path: Vec<String>,
}

impl RouteRow {
    pub fn from_record(
        record: &RouteRecord,
        defaults: &ClassifyDefaults,
        slippage_warn_pct: f64,
    ) -> Self {
        let expected_display = match record.expected_output {
            Some(output) => format!("{:.6} {}", output, record.to_token),
            None => num::PLACEHOLDER.to_string(),
        };
        let time_display = match record.execution_time_secs {
            Some(secs) => format!("{:.1}s", secs),
            None => num::PLACEHOLDER.to_string(),
        };

        Self {
            pair: format!("{} → {}", record.from_token, record.to_token),
            dex: record.dex.clone(),
            amount_display: num::fmt_currency(record.amount_usd),
            expected_display,
            gas_tier: Thresholds::GAS_COST_USD.classify_or(record.gas_cost_usd, defaults.gas),
            gas_display: num::fmt_currency(record.gas_cost_usd),
            slippage_display: num::fmt_pct(record.slippage_pct, 1),
            slippage_warning: record
                .slippage_pct
                .is_some_and(|s| s > slippage_warn_pct),
            efficiency_tier: Thresholds::EFFICIENCY_PCT
                .classify_or(record.efficiency_pct, defaults.efficiency),
            efficiency_display: num::fmt_pct(record.efficiency_pct, 1),
            hops_display: match record.hops {
                Some(hops) => hops.to_string(),
                None => num::PLACEHOLDER.to_string(),
            },
            time_display,
            path: record.path.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StrategyRow {
    pub id: String,
    pub token: String,
    pub plan: Option<String>,
    pub status: StrategyStatus,
    pub progress_display: String,
    pub invested_display: String,
    pub avg_buy_display: String,
    pub current_price_display: String,
    pub value_display: String,
    pub pnl: Option<f64>,
    pub pnl_display: String,
    pub pnl_pct_display: String,
    pub next_buy_display: String,
    pub frequency: Option<String>,
}

impl StrategyRow {
    pub fn from_record(record: &StrategyRecord) -> Self {
        let progress_display = match (record.intervals_completed, record.total_intervals) {
            (Some(done), Some(total)) if total > 0 => {
                format!("{}/{} ({:.0}%)", done, total, (done as f64 / total as f64) * 100.0)
            }
            _ => num::PLACEHOLDER.to_string(),
        };

        let invested_display = format!(
            "{} / {}",
            num::fmt_currency(record.invested_so_far),
            num::fmt_currency(record.total_investment)
        );

        let next_buy_display = match record.next_buy_in_secs {
            Some(secs) if secs >= 0.0 => format_countdown(secs),
            _ => num::PLACEHOLDER.to_string(),
        };

        Self {
            id: record.id.clone(),
            token: record.token.clone(),
            plan: record.plan.clone(),
            status: record.status,
            progress_display,
            invested_display,
            avg_buy_display: num::fmt_currency(record.avg_buy_price),
            current_price_display: num::fmt_currency(record.current_price),
            value_display: num::fmt_currency(record.current_value),
            pnl: record.pnl,
            pnl_display: num::fmt_currency(record.pnl),
            pnl_pct_display: num::fmt_signed_pct(record.pnl_pct, 2),
            next_buy_display,
            frequency: record.frequency.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecutionRow {
    pub time: Option<DateTime<Utc>>,
    pub strategy: String,
    pub plan: Option<String>,
    pub token: String,
    pub action: String,
    pub amount_display: String,
    pub price_display: String,
    pub tokens_display: String,
    pub dex: String,
    pub status: ExecutionStatus,
    pub error: Option<String>,
}

impl ExecutionRow {
    pub fn from_record(record: &ExecutionRecord) -> Self {
        Self {
            time: record.time,
            strategy: record.strategy.clone(),
            plan: record.plan.clone(),
            token: record.token.clone(),
            action: record.action.clone(),
            amount_display: num::fmt_currency(record.amount_usd),
            price_display: num::fmt_currency(record.price),
            tokens_display: num::fmt_f64(record.tokens, 6),
            dex: record.dex.clone(),
            status: record.status,
            error: record.error.clone(),
        }
    }
}

fn magnitude(v: Option<f64>, kind: MagnitudeKind) -> String {
    match v {
        Some(n) => num::format_magnitude(n, kind),
        None => num::PLACEHOLDER.to_string(),
    }
}

/// "3600" → "1h 0m"; short waits render in seconds.
fn format_countdown(secs: f64) -> String {
    let total = secs.round() as u64;
    if total < 60 {
        format!("{}s", total)
    } else if total < 3600 {
        format!("{}m {}s", total / 60, total % 60)
    } else {
        format!("{}h {}m", total / 3600, (total % 3600) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(45.0), "45s");
        assert_eq!(format_countdown(125.0), "2m 5s");
        assert_eq!(format_countdown(3600.0), "1h 0m");
    }
}
