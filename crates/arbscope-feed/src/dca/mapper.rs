use arbscope_types::num::to_num;
use arbscope_types::{dex, ExecutionRecord, ExecutionStatus, StrategyRecord, StrategyStatus};

use super::schema::{RawExecution, RawStrategy};
use crate::convert::{id_string, parse_timestamp, to_count};

pub(crate) fn map_strategy(raw: RawStrategy) -> StrategyRecord {
    let token = clean(raw.token.as_deref(), "?");

    StrategyRecord {
        id: id_string(&raw.id, || token.to_ascii_lowercase()),
        token,
        status: StrategyStatus::from_raw(raw.status.as_deref().unwrap_or("")),
        plan: raw.plan.filter(|p| !p.trim().is_empty()),
        total_investment: to_num(&raw.total_investment),
        invested_so_far: to_num(&raw.invested_so_far),
        intervals_completed: to_count(&raw.intervals_completed),
        total_intervals: to_count(&raw.total_intervals),
        avg_buy_price: to_num(&raw.avg_buy_price),
        current_price: to_num(&raw.current_price),
        total_tokens: to_num(&raw.total_tokens),
        current_value: to_num(&raw.current_value),
        pnl: to_num(&raw.pnl),
        pnl_pct: to_num(&raw.pnl_percentage),
        next_buy_in_secs: to_num(&raw.next_buy_in),
        frequency: raw.frequency.filter(|f| !f.trim().is_empty()),
    }
}

pub(crate) fn map_execution(raw: RawExecution) -> ExecutionRecord {
    ExecutionRecord {
        strategy: clean(raw.strategy.as_deref(), "?"),
        plan: raw.plan.filter(|p| !p.trim().is_empty()),
        token: clean(raw.token.as_deref(), "?"),
        action: clean(raw.action.as_deref(), "?"),
        amount_usd: to_num(&raw.amount),
        price: to_num(&raw.price),
        tokens: to_num(&raw.tokens),
        dex: dex::canonicalize_opt(raw.dex.as_deref()),
        status: ExecutionStatus::from_raw(raw.status.as_deref().unwrap_or("")),
        error: raw.error.filter(|e| !e.trim().is_empty()),
        time: parse_timestamp(raw.time.as_deref()),
    }
}

fn clean(raw: Option<&str>, fallback: &str) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_strategy_progress_inputs() {
        let raw: RawStrategy = serde_json::from_value(json!({
            "id": 3,
            "token": "ETH",
            "status": "active",
            "intervals_completed": 4,
            "total_intervals": "10",
            "next_buy_in": null
        }))
        .unwrap();

        let strategy = map_strategy(raw);
        assert_eq!(strategy.id, "3");
        assert_eq!(strategy.status, StrategyStatus::Active);
        assert_eq!(strategy.intervals_completed, Some(4));
        assert_eq!(strategy.total_intervals, Some(10));
        assert_eq!(strategy.next_buy_in_secs, None);
        assert_eq!(strategy.progress(), Some(0.4));
    }

    #[test]
    fn test_map_execution_normalizes_venue_and_time() {
        let raw: RawExecution = serde_json::from_value(json!({
            "strategy": "dca",
            "plan": "plan-2",
            "token": "ETH",
            "action": "buy",
            "amount": "25",
            "dex": "sushi",
            "status": "success",
            "time": "2026-08-01T09:30:00Z"
        }))
        .unwrap();

        let exec = map_execution(raw);
        assert_eq!(exec.dex, "SushiSwap");
        assert_eq!(exec.status, ExecutionStatus::Success);
        assert_eq!(exec.amount_usd, Some(25.0));
        assert!(exec.time.is_some());
        assert_eq!(exec.error, None);
    }
}
