use anyhow::Result;
use chrono::Utc;

use arbscope_client::{ApiClient, Config};
use arbscope_engine::{FeedResults, Snapshot};

use crate::presentation::views::ExecutionLogView;
use crate::presentation::FormatOptions;

pub async fn handle(config: &Config, limit: usize, json: bool, options: FormatOptions) -> Result<()> {
    let client = ApiClient::new(&config.api)?;
    let fetched = client.execution_log(limit).await.map_err(|e| e.to_string());

    let results = FeedResults {
        executions: Some(fetched),
        ..Default::default()
    };
    let snapshot = Snapshot::build(1, Utc::now(), results, &config.engine_config());

    if json {
        let payload = serde_json::json!({
            "state": snapshot.executions_state,
            "rows": snapshot.executions,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!(
            "{}",
            ExecutionLogView {
                rows: snapshot.executions.clone(),
                state: snapshot.executions_state.clone(),
                options,
            }
        );
    }
    Ok(())
}
