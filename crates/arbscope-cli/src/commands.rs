use anyhow::Result;
use is_terminal::IsTerminal;

use crate::args::{Cli, Commands};
use crate::handlers;
use crate::presentation::FormatOptions;
use arbscope_client::Config;

pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    let options = FormatOptions {
        enable_color: !cli.json
            && !cli.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal(),
    };

    let runtime = tokio::runtime::Runtime::new()?;

    let command = cli.command.unwrap_or(Commands::Overview {
        watch: false,
        interval: None,
    });

    match command {
        Commands::Overview { watch, interval } => runtime.block_on(handlers::overview::handle(
            &config, watch, interval, cli.json, options,
        )),

        Commands::Tokens {
            search,
            sort,
            order,
            limit,
        } => runtime.block_on(handlers::tokens::handle(
            &config,
            search,
            sort.into(),
            order.into(),
            limit,
            cli.json,
            options,
        )),

        Commands::Opportunities {
            search,
            sort,
            order,
            limit,
        } => runtime.block_on(handlers::opportunities::handle(
            &config,
            search,
            sort.into(),
            order.into(),
            limit,
            cli.json,
            options,
        )),

        Commands::Risk {
            search,
            sort,
            order,
        } => runtime.block_on(handlers::risk::handle(
            &config,
            search,
            sort.into(),
            order.into(),
            cli.json,
            options,
        )),

        Commands::Routes { amount } => runtime.block_on(handlers::routes::handle(
            &config, amount, cli.json, options,
        )),

        Commands::Strategies => {
            runtime.block_on(handlers::strategies::handle(&config, cli.json, options))
        }

        Commands::Log { limit } => {
            runtime.block_on(handlers::log::handle(&config, limit, cli.json, options))
        }
    }
}
