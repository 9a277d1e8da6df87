//! Sample endpoint bodies for feed and engine tests.
//!
//! Each function returns one full response body as a JSON string. The
//! records deliberately mix clean and degraded shapes so tests exercise
//! the normalization paths, not just the happy case.

use serde_json::json;

/// `/api/market_data` body: one clean token, one with numeric strings and
/// nulls, one nearly-empty record.
pub fn market_data() -> String {
    json!({
        "tokens": [
            {
                "id": "ethereum",
                "symbol": "ETH",
                "name": "Ethereum",
                "price": 2011.52,
                "change_24h": 2.4,
                "change_7d": -1.1,
                "volume_24h": 14_200_000_000.0,
                "liquidity": 820_000_000.0,
                "volatility": 4.2,
                "market_cap": 242_000_000_000.0,
                "fdv": 242_000_000_000.0,
                "circulating_supply": 120_400_000.0,
                "total_supply": 120_400_000.0,
                "ath": 4878.26,
                "atl": 0.43
            },
            {
                "id": "pepe",
                "symbol": "PEPE",
                "name": "Pepe",
                "price": "0.0000071",
                "change_24h": "18.3",
                "change_7d": null,
                "volume_24h": "903000000",
                "liquidity": null,
                "volatility": "22.7",
                "market_cap": 2_990_000_000.0,
                "circulating_supply": "420690000000000",
                "ath": "0.000017"
            },
            {
                "symbol": "MYST"
            }
        ]
    })
    .to_string()
}

/// `/api/arbitrage` body: detector output with no status field plus one
/// executed and one malformed entry.
pub fn arbitrage() -> String {
    json!({
        "opportunities": [
            {
                "token": "ETH",
                "buy_exchange": "uniswap_v3",
                "sell_exchange": "sushi",
                "profit_usd": 14.2,
                "profit_percentage": 0.9,
                "volume_24h": 5_200_000.0,
                "timestamp": "2026-08-01T10:15:00Z"
            },
            {
                "token": "SOL",
                "buy_exchange": "raydium",
                "sell_exchange": "Orca",
                "profit_usd": "3.75",
                "profit_percentage": "0.41",
                "status": "executed",
                "timestamp": "2026-08-01T10:12:30Z"
            },
            {
                "token": "LINK",
                "profit_usd": "not-a-number",
                "status": "vaporized"
            }
        ]
    })
    .to_string()
}

/// `/api/risk_management` body: one healthy position, one flagged
/// high-risk, one with the risk score missing entirely.
pub fn risk_management() -> String {
    json!({
        "risk_data": [
            {
                "id": "btc",
                "symbol": "BTC",
                "name": "Bitcoin",
                "current_price": 64_123.0,
                "stop_loss": 57_710.7,
                "position_size": 0.5,
                "risk_percentage": 10.0,
                "volatility": 3.1,
                "risk_score": 0.22,
                "max_drawdown": 12.5,
                "sharpe_ratio": 1.8,
                "status": "active"
            },
            {
                "id": "doge",
                "symbol": "DOGE",
                "name": "Dogecoin",
                "current_price": "0.084",
                "stop_loss": "0.0756",
                "position_size": "12000",
                "risk_percentage": 10.0,
                "volatility": 19.4,
                "risk_score": 0.81,
                "max_drawdown": 44.0,
                "sharpe_ratio": 0.4,
                "status": "high_risk"
            },
            {
                "id": "newcoin",
                "symbol": "NEW",
                "name": "NewCoin",
                "current_price": 1.02,
                "risk_score": null,
                "sharpe_ratio": null,
                "status": "delisted"
            }
        ]
    })
    .to_string()
}

/// `/api/routes` body: attributed, source-fallback, and address-venue
/// routes.
pub fn routes() -> String {
    json!({
        "routes": [
            {
                "from_token": "ETH",
                "to_token": "USDC",
                "amount": 500,
                "best_dex": "uniswap_v3",
                "expected_output": 1004.35,
                "slippage": 0.3,
                "gas_cost_usd": 12.1,
                "efficiency": 98.2,
                "price_impact": 0.05,
                "route_hops": 1,
                "execution_time": 14.0,
                "path": ["ETH", "USDC"]
            },
            {
                "from_token": "WBTC",
                "to_token": "DAI",
                "amount": "500",
                "best_dex": "Unknown",
                "source": "openocean",
                "expected_output": "498.8",
                "slippage": "1.9",
                "gas_cost_usd": "44",
                "efficiency": "93.5",
                "route_hops": "2",
                "path": ["WBTC", "WETH", "DAI"]
            },
            {
                "from_token": "PLS",
                "to_token": "USDT",
                "best_dex": "0x7a250d5630b4cf539739df2c5dacb4c659f2488d",
                "gas_cost_usd": 71.0,
                "efficiency": 88.0
            }
        ]
    })
    .to_string()
}

/// `/api/dca_data` body: an active plan, a paused plan with string
/// numerics, and a completed plan.
pub fn dca_data() -> String {
    json!({
        "strategies": [
            {
                "id": 1,
                "token": "ETH",
                "status": "active",
                "plan": "plan-1",
                "total_investment": 1000.0,
                "invested_so_far": 400.0,
                "intervals_completed": 4,
                "total_intervals": 10,
                "avg_buy_price": 1987.2,
                "current_price": 2011.52,
                "total_tokens": 0.2013,
                "current_value": 404.9,
                "pnl": 4.9,
                "pnl_percentage": 1.22,
                "next_buy_in": 3600,
                "frequency": "hourly"
            },
            {
                "id": 2,
                "token": "BTC",
                "status": "paused",
                "plan": "plan-2",
                "total_investment": "2500",
                "invested_so_far": "500",
                "intervals_completed": "2",
                "total_intervals": "10",
                "avg_buy_price": "63100",
                "current_price": "64123",
                "total_tokens": "0.0079",
                "current_value": "506.5",
                "pnl": "6.5",
                "pnl_percentage": "1.3",
                "next_buy_in": null,
                "frequency": "daily"
            },
            {
                "id": 3,
                "token": "SOL",
                "status": "completed",
                "total_investment": 300.0,
                "intervals_completed": 6,
                "total_intervals": 6,
                "pnl": -12.2,
                "pnl_percentage": -4.1
            }
        ]
    })
    .to_string()
}

/// `/api/execution_log` body, envelope form.
pub fn execution_log() -> String {
    json!({
        "log": [
            {
                "strategy": "dca",
                "plan": "plan-1",
                "token": "ETH",
                "action": "buy",
                "amount": 100.0,
                "price": 2005.1,
                "tokens": 0.0499,
                "dex": "uniswap_v3",
                "status": "success",
                "time": "2026-08-01T09:00:00Z"
            },
            {
                "strategy": "dca",
                "plan": "plan-2",
                "token": "BTC",
                "action": "buy",
                "amount": "250",
                "price": null,
                "dex": "sushi",
                "status": "failed",
                "error": "insufficient liquidity",
                "time": "2026-08-01T08:00:00Z"
            }
        ]
    })
    .to_string()
}

/// A body that is valid JSON but not the expected envelope.
pub fn wrong_shape() -> String {
    json!({"detail": "Internal Server Error"}).to_string()
}
