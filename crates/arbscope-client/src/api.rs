use std::time::Duration;

use arbscope_types::{
    ExecutionRecord, OpportunityRecord, RiskRecord, RouteRecord, StrategyRecord, TokenRecord,
};

use crate::config::ApiConfig;
use crate::Result;

/// Thin wrapper over the backend's resource endpoints. Each method fetches
/// one endpoint and normalizes its envelope; transport and decode failures
/// surface as errors for the caller to turn into a per-resource load state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn market_data(&self) -> Result<Vec<TokenRecord>> {
        let body = self.get("/api/market_data", &[]).await?;
        Ok(arbscope_feed::market::parse_tokens(&body)?)
    }

    pub async fn arbitrage(&self) -> Result<Vec<OpportunityRecord>> {
        let body = self.get("/api/arbitrage", &[]).await?;
        Ok(arbscope_feed::arbitrage::parse_opportunities(&body)?)
    }

    pub async fn risk_management(&self) -> Result<Vec<RiskRecord>> {
        let body = self.get("/api/risk_management", &[]).await?;
        Ok(arbscope_feed::risk::parse_risk(&body)?)
    }

    pub async fn routes(&self, amount_usd: f64) -> Result<Vec<RouteRecord>> {
        let query = [("amount", amount_usd.to_string())];
        let body = self.get("/api/routes", &query).await?;
        Ok(arbscope_feed::routes::parse_routes(&body)?)
    }

    pub async fn dca_data(&self) -> Result<Vec<StrategyRecord>> {
        let body = self.get("/api/dca_data", &[]).await?;
        Ok(arbscope_feed::dca::parse_strategies(&body)?)
    }

    pub async fn execution_log(&self, limit: usize) -> Result<Vec<ExecutionRecord>> {
        let query = [("limit", limit.to_string())];
        let body = self.get("/api/execution_log", &query).await?;
        Ok(arbscope_feed::dca::parse_execution_log(&body)?)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}
