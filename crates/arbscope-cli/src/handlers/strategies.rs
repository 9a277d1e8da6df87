use anyhow::Result;
use chrono::Utc;

use arbscope_client::{ApiClient, Config};
use arbscope_engine::{FeedResults, Snapshot};

use crate::presentation::views::StrategyCardsView;
use crate::presentation::FormatOptions;

pub async fn handle(config: &Config, json: bool, options: FormatOptions) -> Result<()> {
    let client = ApiClient::new(&config.api)?;
    let fetched = client.dca_data().await.map_err(|e| e.to_string());

    let results = FeedResults {
        strategies: Some(fetched),
        ..Default::default()
    };
    let snapshot = Snapshot::build(1, Utc::now(), results, &config.engine_config());

    if json {
        let payload = serde_json::json!({
            "state": snapshot.strategies_state,
            "rows": snapshot.strategies,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!(
            "{}",
            StrategyCardsView {
                rows: snapshot.strategies.clone(),
                state: snapshot.strategies_state.clone(),
                options,
            }
        );
    }
    Ok(())
}
