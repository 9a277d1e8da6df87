use anyhow::Result;
use chrono::Utc;

use arbscope_client::{ApiClient, Config};
use arbscope_engine::{project, FeedResults, RiskSortKey, Snapshot, SortOrder, TableQuery};

use crate::presentation::views::RiskTableView;
use crate::presentation::FormatOptions;

pub async fn handle(
    config: &Config,
    search: Option<String>,
    sort: RiskSortKey,
    order: SortOrder,
    json: bool,
    options: FormatOptions,
) -> Result<()> {
    let client = ApiClient::new(&config.api)?;
    let fetched = client.risk_management().await.map_err(|e| e.to_string());

    let results = FeedResults {
        risk: Some(fetched),
        ..Default::default()
    };
    let snapshot = Snapshot::build(1, Utc::now(), results, &config.engine_config());

    let query = TableQuery::new(sort)
        .with_order(order)
        .with_search(search.unwrap_or_default());
    let rows = project(&snapshot.risk, &query);

    if json {
        let payload = serde_json::json!({
            "state": snapshot.risk_state,
            "rows": rows,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!(
            "{}",
            RiskTableView {
                rows,
                state: snapshot.risk_state.clone(),
                options,
            }
        );
    }
    Ok(())
}
