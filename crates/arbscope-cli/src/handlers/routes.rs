use anyhow::Result;
use chrono::Utc;

use arbscope_client::{ApiClient, Config};
use arbscope_engine::{FeedResults, Snapshot};

use crate::presentation::views::RouteTableView;
use crate::presentation::FormatOptions;

pub async fn handle(
    config: &Config,
    amount: Option<f64>,
    json: bool,
    options: FormatOptions,
) -> Result<()> {
    let amount_usd = amount.unwrap_or(config.api.routes_amount_usd);

    let client = ApiClient::new(&config.api)?;
    let fetched = client.routes(amount_usd).await.map_err(|e| e.to_string());

    let results = FeedResults {
        routes: Some(fetched),
        ..Default::default()
    };
    let snapshot = Snapshot::build(1, Utc::now(), results, &config.engine_config());

    if json {
        let payload = serde_json::json!({
            "state": snapshot.routes_state,
            "rows": snapshot.routes,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!(
            "{}",
            RouteTableView {
                rows: snapshot.routes.clone(),
                state: snapshot.routes_state.clone(),
                options,
            }
        );
    }
    Ok(())
}
