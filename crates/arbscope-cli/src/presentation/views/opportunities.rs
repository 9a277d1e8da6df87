use std::fmt;

use arbscope_engine::{LoadState, OpportunityRow};

use super::write_load_state;
use crate::presentation::formatters::{text::pad, time};
use crate::presentation::style;
use crate::presentation::FormatOptions;

pub struct OpportunityTableView {
    pub rows: Vec<OpportunityRow>,
    pub state: LoadState,
    pub options: FormatOptions,
}

impl fmt::Display for OpportunityTableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if write_load_state(
            f,
            "no opportunities",
            self.rows.len(),
            &self.state,
            self.options,
        )? {
            return Ok(());
        }
        let color = self.options.enable_color;

        writeln!(
            f,
            "{}",
            style::dim(
                &format!(
                    "{} {} {} {} {} {} {}",
                    pad("PAIR", 12),
                    pad("ROUTE", 26),
                    pad("PROFIT", 11),
                    pad("SPREAD", 8),
                    pad("VOLUME", 9),
                    pad("WHEN", 13),
                    pad("STATUS", 9),
                ),
                color
            )
        )?;

        for row in &self.rows {
            let route = format!("{} → {}", row.buy_dex, row.sell_dex);
            writeln!(
                f,
                "{} {} {} {} {} {} {}",
                pad(&row.pair, 12),
                pad(&route, 26),
                style::paint_signed(&pad(&row.profit_display, 11), row.profit_usd, color),
                pad(&row.profit_pct_display, 8),
                pad(&row.volume_display, 9),
                style::dim(&pad(&time::format_relative_time(row.timestamp), 13), color),
                style::paint(&pad(row.status.label(), 9), row.status.style(), color),
            )?;
        }
        Ok(())
    }
}
