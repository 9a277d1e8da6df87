use arbscope_feed::{arbitrage, dca, market, risk, routes};
use arbscope_testing::payloads;
use arbscope_types::{ExecutionStatus, OpportunityStatus, RiskStatus, StrategyStatus};

#[test]
fn test_market_data_normalizes_every_record() {
    let tokens = market::parse_tokens(&payloads::market_data()).unwrap();
    assert_eq!(tokens.len(), 3, "every object element should survive");

    let eth = &tokens[0];
    assert_eq!(eth.symbol, "ETH");
    assert_eq!(eth.price, Some(2011.52));

    // Numeric strings coerce, nulls stay absent.
    let pepe = &tokens[1];
    assert_eq!(pepe.price, Some(0.0000071));
    assert_eq!(pepe.change_7d, None);
    assert_eq!(pepe.liquidity, None);
    assert_eq!(pepe.volume_24h, Some(903_000_000.0));

    // A nearly-empty record still yields a usable identity.
    let myst = &tokens[2];
    assert_eq!(myst.symbol, "MYST");
    assert_eq!(myst.id, "myst");
    assert_eq!(myst.price, None);
}

#[test]
fn test_arbitrage_status_defaults_and_fallbacks() {
    let opps = arbitrage::parse_opportunities(&payloads::arbitrage()).unwrap();
    assert_eq!(opps.len(), 3);

    assert_eq!(opps[0].status, OpportunityStatus::Detected);
    assert_eq!(opps[0].buy_dex, "Uniswap V3");
    assert_eq!(opps[0].sell_dex, "SushiSwap");
    assert!(opps[0].timestamp.is_some());

    assert_eq!(opps[1].status, OpportunityStatus::Executed);
    // Unrecognized venue passes through unchanged.
    assert_eq!(opps[1].sell_dex, "Orca");

    assert_eq!(opps[2].status, OpportunityStatus::Unknown);
    assert_eq!(opps[2].profit_usd, None);
}

#[test]
fn test_risk_management_statuses_and_missing_score() {
    let rows = risk::parse_risk(&payloads::risk_management()).unwrap();
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].status, RiskStatus::Active);
    assert_eq!(rows[0].risk_score, Some(0.22));

    assert_eq!(rows[1].status, RiskStatus::HighRisk);
    assert_eq!(rows[1].position_size, Some(12_000.0));

    // "delisted" is outside the enumerated set.
    assert_eq!(rows[2].status, RiskStatus::Unknown);
    assert_eq!(rows[2].risk_score, None);
}

#[test]
fn test_routes_venue_attribution() {
    let rows = routes::parse_routes(&payloads::routes()).unwrap();
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].dex, "Uniswap V3");
    assert_eq!(rows[1].dex, "OpenOcean", "Unknown best_dex falls back to source");
    assert_eq!(rows[2].dex, "0x7a25…488d", "address venues shorten");
    assert_eq!(rows[1].hops, Some(2));
    assert_eq!(rows[1].expected_output, Some(498.8));
}

#[test]
fn test_dca_strategies_and_log() {
    let strategies = dca::parse_strategies(&payloads::dca_data()).unwrap();
    assert_eq!(strategies.len(), 3);
    assert_eq!(strategies[0].status, StrategyStatus::Active);
    assert_eq!(strategies[1].status, StrategyStatus::Paused);
    assert_eq!(strategies[1].total_investment, Some(2500.0));
    assert_eq!(strategies[2].status, StrategyStatus::Completed);
    assert_eq!(strategies[2].progress(), Some(1.0));

    let log = dca::parse_execution_log(&payloads::execution_log()).unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].status, ExecutionStatus::Success);
    assert_eq!(log[1].status, ExecutionStatus::Failed);
    assert_eq!(log[1].error.as_deref(), Some("insufficient liquidity"));
    assert_eq!(log[1].price, None);
}

#[test]
fn test_execution_log_accepts_bare_array() {
    let body = r#"[{"strategy":"dca","token":"ETH","action":"buy","status":"pending"}]"#;
    let log = dca::parse_execution_log(body).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].status, ExecutionStatus::Pending);
}

#[test]
fn test_wrong_envelope_yields_zero_records() {
    assert!(market::parse_tokens(&payloads::wrong_shape()).unwrap().is_empty());
    assert!(routes::parse_routes(&payloads::wrong_shape()).unwrap().is_empty());
}

#[test]
fn test_non_json_body_is_an_error() {
    assert!(market::parse_tokens("<html>502</html>").is_err());
}
