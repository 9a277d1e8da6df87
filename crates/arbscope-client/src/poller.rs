use arbscope_engine::{EngineConfig, FeedResults, Snapshot};
use chrono::Utc;

use crate::api::ApiClient;
use crate::config::Config;
use crate::Result;

/// Pull-based snapshot producer: one call, one immutable snapshot.
///
/// Each tick fetches every resource concurrently, joins the results, and
/// derives a fresh snapshot with a version one higher than the last. A
/// resource that fails contributes zero rows and a visible failure state;
/// nothing is mutated in place between ticks.
pub struct Poller {
    client: ApiClient,
    engine: EngineConfig,
    routes_amount_usd: f64,
    log_limit: usize,
    next_version: u64,
}

impl Poller {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(&config.api)?,
            engine: config.engine_config(),
            routes_amount_usd: config.api.routes_amount_usd,
            log_limit: 50,
            next_version: 1,
        })
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine
    }

    /// Fetch every resource and derive the next snapshot.
    pub async fn tick(&mut self) -> Snapshot {
        let version = self.next_version;
        self.next_version += 1;

        let (tokens, opportunities, risk, routes, strategies, executions) = tokio::join!(
            self.client.market_data(),
            self.client.arbitrage(),
            self.client.risk_management(),
            self.client.routes(self.routes_amount_usd),
            self.client.dca_data(),
            self.client.execution_log(self.log_limit),
        );

        let results = FeedResults {
            tokens: Some(tokens.map_err(|e| e.to_string())),
            opportunities: Some(opportunities.map_err(|e| e.to_string())),
            risk: Some(risk.map_err(|e| e.to_string())),
            routes: Some(routes.map_err(|e| e.to_string())),
            strategies: Some(strategies.map_err(|e| e.to_string())),
            executions: Some(executions.map_err(|e| e.to_string())),
        };

        Snapshot::build(version, Utc::now(), results, &self.engine)
    }

    /// Version the next tick will carry; renderers drop anything older.
    pub fn next_version(&self) -> u64 {
        self.next_version
    }
}
