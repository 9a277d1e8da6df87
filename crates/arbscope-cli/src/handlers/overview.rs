use std::time::Duration;

use anyhow::Result;

use arbscope_client::{Config, Poller};

use crate::presentation::views::OverviewView;
use crate::presentation::FormatOptions;

pub async fn handle(
    config: &Config,
    watch: bool,
    interval: Option<u64>,
    json: bool,
    options: FormatOptions,
) -> Result<()> {
    let mut poller = Poller::new(config)?;

    if !watch {
        let snapshot = poller.tick().await;
        render(snapshot, json, options)?;
        return Ok(());
    }

    let interval_secs = interval.unwrap_or(config.engine.poll_interval_secs).max(1);
    let mut last_rendered = 0u64;

    loop {
        let snapshot = poller.tick().await;

        // A tick that lost the race to a newer one is stale; drop it
        // rather than repaint backwards.
        if snapshot.version > last_rendered {
            last_rendered = snapshot.version;
            if !json && options.enable_color {
                print!("\x1b[2J\x1b[H");
            }
            render(snapshot, json, options)?;
        }

        tokio::time::sleep(Duration::from_secs(interval_secs)).await;
    }
}

fn render(snapshot: arbscope_engine::Snapshot, json: bool, options: FormatOptions) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", OverviewView { snapshot, options });
    }
    Ok(())
}
