use arbscope_types::num::to_num;
use arbscope_types::{dex, RouteRecord};

use super::schema::RawRoute;
use crate::convert::to_count;

pub(crate) fn map_route(raw: RawRoute) -> RouteRecord {
    RouteRecord {
        from_token: clean_symbol(raw.from_token.as_deref()),
        to_token: clean_symbol(raw.to_token.as_deref()),
        amount_usd: to_num(&raw.amount),
        dex: dex::canonicalize_opt(pick_dex(raw.best_dex.as_deref(), raw.source.as_deref())),
        expected_output: to_num(&raw.expected_output),
        slippage_pct: to_num(&raw.slippage),
        gas_cost_usd: to_num(&raw.gas_cost_usd),
        efficiency_pct: to_num(&raw.efficiency),
        price_impact_pct: to_num(&raw.price_impact),
        hops: to_count(&raw.route_hops),
        execution_time_secs: to_num(&raw.execution_time),
        path: raw
            .path
            .iter()
            .filter_map(|hop| hop.as_str())
            .map(str::to_string)
            .collect(),
    }
}

/// Venue attribution: `best_dex` wins unless it is absent or the literal
/// "Unknown", in which case the aggregator `source` stands in. An
/// unattributable route keeps whatever the router said.
fn pick_dex<'a>(best_dex: Option<&'a str>, source: Option<&'a str>) -> Option<&'a str> {
    match best_dex {
        Some(b) if !b.trim().is_empty() && b != "Unknown" => Some(b),
        other => source.filter(|s| !s.trim().is_empty()).or(other),
    }
}

fn clean_symbol(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("?")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_route_unknown_dex_falls_back_to_source() {
        let raw: RawRoute = serde_json::from_value(json!({
            "from_token": "ETH",
            "to_token": "USDC",
            "best_dex": "Unknown",
            "source": "openocean",
            "amount": 500
        }))
        .unwrap();

        let route = map_route(raw);
        assert_eq!(route.dex, "OpenOcean");
        assert_eq!(route.amount_usd, Some(500.0));
    }

    #[test]
    fn test_map_route_best_dex_wins_when_attributed() {
        let raw: RawRoute = serde_json::from_value(json!({
            "best_dex": "uniswap v3",
            "source": "1inch"
        }))
        .unwrap();
        assert_eq!(map_route(raw).dex, "Uniswap V3");
    }

    #[test]
    fn test_map_route_no_attribution_at_all() {
        let raw: RawRoute = serde_json::from_value(json!({"from_token": "ETH"})).unwrap();
        assert_eq!(map_route(raw).dex, dex::UNKNOWN_DEX);
    }

    #[test]
    fn test_map_route_path_and_counts() {
        let raw: RawRoute = serde_json::from_value(json!({
            "path": ["ETH", "WBTC", 42, "USDC"],
            "route_hops": "3",
            "slippage": "0.4"
        }))
        .unwrap();

        let route = map_route(raw);
        assert_eq!(route.path, vec!["ETH", "WBTC", "USDC"]);
        assert_eq!(route.hops, Some(3));
        assert_eq!(route.slippage_pct, Some(0.4));
    }
}
