//! One atomic, versioned collection of everything the console displays.

use arbscope_types::{
    ClassifyDefaults, ExecutionRecord, OpportunityRecord, RiskRecord, RouteRecord, StrategyRecord,
    TokenRecord,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::rows::{ExecutionRow, OpportunityRow, RiskRow, RouteRow, StrategyRow, TokenRow};
use crate::summary::DashboardSummary;

/// Operational knobs the view layer must not hard-code.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub defaults: ClassifyDefaults,
    /// Volatility above this (percent) raises an alert.
    pub volatility_alert_pct: f64,
    /// Slippage above this (percent) flags the route.
    pub slippage_warn_pct: f64,
    /// Status line shown in the overview header.
    pub banner: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            defaults: ClassifyDefaults::default(),
            volatility_alert_pct: 15.0,
            slippage_warn_pct: 1.5,
            banner: None,
        }
    }
}

/// Outcome of loading one resource for one tick.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "detail")]
pub enum LoadState {
    /// Loaded with this many records (zero is a valid, visible result).
    Loaded(usize),
    /// The fetch or decode failed; the resource shows no rows this tick.
    Failed(String),
}

impl LoadState {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}

/// Per-resource fetch results handed to the snapshot builder. `Err` holds
/// a human-readable transport/decode failure for that resource alone.
#[derive(Debug, Default)]
pub struct FeedResults {
    pub tokens: Option<Result<Vec<TokenRecord>, String>>,
    pub opportunities: Option<Result<Vec<OpportunityRecord>, String>>,
    pub risk: Option<Result<Vec<RiskRecord>, String>>,
    pub routes: Option<Result<Vec<RouteRecord>, String>>,
    pub strategies: Option<Result<Vec<StrategyRecord>, String>>,
    pub executions: Option<Result<Vec<ExecutionRecord>, String>>,
}

/// The fully derived state for one poll tick. Built in one shot, never
/// mutated afterwards; the next tick replaces the whole value.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub version: u64,
    pub fetched_at: DateTime<Utc>,
    pub banner: Option<String>,

    pub tokens: Vec<TokenRow>,
    pub tokens_state: LoadState,
    pub opportunities: Vec<OpportunityRow>,
    pub opportunities_state: LoadState,
    pub risk: Vec<RiskRow>,
    pub risk_state: LoadState,
    pub routes: Vec<RouteRow>,
    pub routes_state: LoadState,
    pub strategies: Vec<StrategyRow>,
    pub strategies_state: LoadState,
    pub executions: Vec<ExecutionRow>,
    pub executions_state: LoadState,

    pub summary: DashboardSummary,
}

impl Snapshot {
    /// Derive one tick's snapshot. Resources that were not requested this
    /// tick count as loaded-empty; failed resources keep their failure
    /// reason visible while contributing zero rows.
    pub fn build(
        version: u64,
        fetched_at: DateTime<Utc>,
        results: FeedResults,
        config: &EngineConfig,
    ) -> Self {
        let (token_records, tokens_state) = unpack(results.tokens);
        let (opportunity_records, opportunities_state) = unpack(results.opportunities);
        let (risk_records, risk_state) = unpack(results.risk);
        let (route_records, routes_state) = unpack(results.routes);
        let (strategy_records, strategies_state) = unpack(results.strategies);
        let (execution_records, executions_state) = unpack(results.executions);

        let summary = DashboardSummary::compute(
            &token_records,
            &opportunity_records,
            &risk_records,
            &strategy_records,
            config.volatility_alert_pct,
        );

        Self {
            version,
            fetched_at,
            banner: config.banner.clone(),
            tokens: token_records
                .iter()
                .map(|r| TokenRow::from_record(r, &config.defaults))
                .collect(),
            tokens_state,
            opportunities: opportunity_records
                .iter()
                .map(OpportunityRow::from_record)
                .collect(),
            opportunities_state,
            risk: risk_records
                .iter()
                .map(|r| RiskRow::from_record(r, &config.defaults))
                .collect(),
            risk_state,
            routes: route_records
                .iter()
                .map(|r| RouteRow::from_record(r, &config.defaults, config.slippage_warn_pct))
                .collect(),
            routes_state,
            strategies: strategy_records
                .iter()
                .map(StrategyRow::from_record)
                .collect(),
            strategies_state,
            executions: execution_records
                .iter()
                .map(ExecutionRow::from_record)
                .collect(),
            executions_state,
            summary,
        }
    }

    /// True when every requested resource failed this tick.
    pub fn all_failed(&self) -> bool {
        [
            &self.tokens_state,
            &self.opportunities_state,
            &self.risk_state,
            &self.routes_state,
            &self.strategies_state,
            &self.executions_state,
        ]
        .into_iter()
        .all(LoadState::is_failed)
    }

    /// Resources that failed this tick, with their reasons.
    pub fn failures(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        for (name, state) in [
            ("tokens", &self.tokens_state),
            ("opportunities", &self.opportunities_state),
            ("risk", &self.risk_state),
            ("routes", &self.routes_state),
            ("strategies", &self.strategies_state),
            ("executions", &self.executions_state),
        ] {
            if let LoadState::Failed(reason) = state {
                out.push((name, reason.as_str()));
            }
        }
        out
    }
}

fn unpack<R>(result: Option<Result<Vec<R>, String>>) -> (Vec<R>, LoadState) {
    match result {
        Some(Ok(records)) => {
            let state = LoadState::Loaded(records.len());
            (records, state)
        }
        Some(Err(reason)) => (Vec::new(), LoadState::Failed(reason)),
        None => (Vec::new(), LoadState::Loaded(0)),
    }
}
