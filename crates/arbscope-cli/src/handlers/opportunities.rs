use anyhow::Result;
use chrono::Utc;

use arbscope_client::{ApiClient, Config};
use arbscope_engine::{project, FeedResults, OpportunitySortKey, Snapshot, SortOrder, TableQuery};

use crate::presentation::views::OpportunityTableView;
use crate::presentation::FormatOptions;

pub async fn handle(
    config: &Config,
    search: Option<String>,
    sort: OpportunitySortKey,
    order: SortOrder,
    limit: Option<usize>,
    json: bool,
    options: FormatOptions,
) -> Result<()> {
    let client = ApiClient::new(&config.api)?;
    let fetched = client.arbitrage().await.map_err(|e| e.to_string());

    let results = FeedResults {
        opportunities: Some(fetched),
        ..Default::default()
    };
    let snapshot = Snapshot::build(1, Utc::now(), results, &config.engine_config());

    let query = TableQuery::new(sort)
        .with_order(order)
        .with_search(search.unwrap_or_default());
    let mut rows = project(&snapshot.opportunities, &query);
    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    if json {
        let payload = serde_json::json!({
            "state": snapshot.opportunities_state,
            "rows": rows,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!(
            "{}",
            OpportunityTableView {
                rows,
                state: snapshot.opportunities_state.clone(),
                options,
            }
        );
    }
    Ok(())
}
