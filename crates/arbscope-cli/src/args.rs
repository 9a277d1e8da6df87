use arbscope_engine::{OpportunitySortKey, RiskSortKey, SortOrder, TokenSortKey};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "arbscope",
    version,
    about = "Terminal operations console for an automated DEX arbitrage backend"
)]
pub struct Cli {
    /// Path to the config file (default: XDG config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Backend base URL, overriding the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Full dashboard: summary, opportunities, and risk (the default)
    Overview {
        /// Keep refreshing until interrupted
        #[arg(long)]
        watch: bool,

        /// Seconds between refreshes in watch mode
        #[arg(long)]
        interval: Option<u64>,
    },

    /// Market data for all monitored tokens
    Tokens {
        /// Case-insensitive filter over symbol and name
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum, default_value_t = TokenSortArg::MarketCap)]
        sort: TokenSortArg,

        #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
        order: OrderArg,

        /// Show at most this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Recent arbitrage opportunities
    Opportunities {
        /// Case-insensitive filter over pair and venues
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum, default_value_t = OpportunitySortArg::ProfitUsd)]
        sort: OpportunitySortArg,

        #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
        order: OrderArg,

        /// Show at most this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Position sizing and risk metrics
    Risk {
        /// Case-insensitive filter over symbol and name
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum, default_value_t = RiskSortArg::RiskScore)]
        sort: RiskSortArg,

        #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
        order: OrderArg,
    },

    /// Optimal swap routes for a notional
    Routes {
        /// Notional to quote, USD (default from config)
        #[arg(long)]
        amount: Option<f64>,
    },

    /// Scheduled accumulation (DCA) strategies
    Strategies,

    /// Strategy execution log
    Log {
        /// Entries to request
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenSortArg {
    Price,
    Change24h,
    Volume,
    MarketCap,
}

impl From<TokenSortArg> for TokenSortKey {
    fn from(arg: TokenSortArg) -> Self {
        match arg {
            TokenSortArg::Price => TokenSortKey::Price,
            TokenSortArg::Change24h => TokenSortKey::Change24h,
            TokenSortArg::Volume => TokenSortKey::Volume24h,
            TokenSortArg::MarketCap => TokenSortKey::MarketCap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpportunitySortArg {
    ProfitUsd,
    ProfitPct,
}

impl From<OpportunitySortArg> for OpportunitySortKey {
    fn from(arg: OpportunitySortArg) -> Self {
        match arg {
            OpportunitySortArg::ProfitUsd => OpportunitySortKey::ProfitUsd,
            OpportunitySortArg::ProfitPct => OpportunitySortKey::ProfitPct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RiskSortArg {
    RiskScore,
    Volatility,
    Sharpe,
}

impl From<RiskSortArg> for RiskSortKey {
    fn from(arg: RiskSortArg) -> Self {
        match arg {
            RiskSortArg::RiskScore => RiskSortKey::RiskScore,
            RiskSortArg::Volatility => RiskSortKey::Volatility,
            RiskSortArg::Sharpe => RiskSortKey::SharpeRatio,
        }
    }
}
