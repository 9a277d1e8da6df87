use anyhow::Result;
use chrono::Utc;

use arbscope_client::{ApiClient, Config};
use arbscope_engine::{project, FeedResults, Snapshot, SortOrder, TableQuery, TokenSortKey};

use crate::presentation::views::TokenTableView;
use crate::presentation::FormatOptions;

pub async fn handle(
    config: &Config,
    search: Option<String>,
    sort: TokenSortKey,
    order: SortOrder,
    limit: Option<usize>,
    json: bool,
    options: FormatOptions,
) -> Result<()> {
    let client = ApiClient::new(&config.api)?;
    let fetched = client.market_data().await.map_err(|e| e.to_string());

    let results = FeedResults {
        tokens: Some(fetched),
        ..Default::default()
    };
    let snapshot = Snapshot::build(1, Utc::now(), results, &config.engine_config());

    let query = TableQuery::new(sort)
        .with_order(order)
        .with_search(search.unwrap_or_default());
    let mut rows = project(&snapshot.tokens, &query);
    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    if json {
        let payload = serde_json::json!({
            "state": snapshot.tokens_state,
            "rows": rows,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!(
            "{}",
            TokenTableView {
                rows,
                state: snapshot.tokens_state.clone(),
                options,
            }
        );
    }
    Ok(())
}
