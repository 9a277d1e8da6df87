mod log;
mod opportunities;
mod overview;
mod risk;
mod routes;
mod strategies;
mod tokens;

pub use log::ExecutionLogView;
pub use opportunities::OpportunityTableView;
pub use overview::OverviewView;
pub use risk::RiskTableView;
pub use routes::RouteTableView;
pub use strategies::StrategyCardsView;
pub use tokens::TokenTableView;

use crate::presentation::style;
use crate::presentation::FormatOptions;
use arbscope_engine::LoadState;
use arbscope_types::TierStyle;
use std::fmt;

/// Shared rendering of a resource's load state. Returns true when the
/// caller should skip the table body (failed or empty).
pub(crate) fn write_load_state(
    f: &mut fmt::Formatter<'_>,
    empty_label: &str,
    row_count: usize,
    state: &LoadState,
    options: FormatOptions,
) -> Result<bool, fmt::Error> {
    match state {
        LoadState::Failed(reason) => {
            writeln!(
                f,
                "{}",
                style::paint(
                    &format!("load failed: {}", reason),
                    TierStyle::Critical,
                    options.enable_color
                )
            )?;
            Ok(true)
        }
        LoadState::Loaded(_) if row_count == 0 => {
            writeln!(f, "{}", style::dim(empty_label, options.enable_color))?;
            Ok(true)
        }
        LoadState::Loaded(_) => Ok(false),
    }
}
