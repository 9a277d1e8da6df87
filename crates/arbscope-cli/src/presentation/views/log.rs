use std::fmt;

use arbscope_engine::{ExecutionRow, LoadState};

use super::write_load_state;
use crate::presentation::formatters::{text, text::pad, time};
use crate::presentation::style;
use crate::presentation::FormatOptions;

pub struct ExecutionLogView {
    pub rows: Vec<ExecutionRow>,
    pub state: LoadState,
    pub options: FormatOptions,
}

impl fmt::Display for ExecutionLogView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if write_load_state(f, "no executions", self.rows.len(), &self.state, self.options)? {
            return Ok(());
        }
        let color = self.options.enable_color;

        writeln!(
            f,
            "{}",
            style::dim(
                &format!(
                    "{} {} {} {} {} {} {} {}",
                    pad("WHEN", 13),
                    pad("PLAN", 10),
                    pad("TOKEN", 7),
                    pad("ACTION", 7),
                    pad("AMOUNT", 10),
                    pad("PRICE", 13),
                    pad("VENUE", 12),
                    pad("STATUS", 8),
                ),
                color
            )
        )?;

        for row in &self.rows {
            writeln!(
                f,
                "{} {} {} {} {} {} {} {}",
                style::dim(&pad(&time::format_relative_time(row.time), 13), color),
                pad(row.plan.as_deref().unwrap_or(&row.strategy), 10),
                pad(&row.token, 7),
                pad(&row.action, 7),
                pad(&row.amount_display, 10),
                pad(&row.price_display, 13),
                pad(&row.dex, 12),
                style::paint(&pad(row.status.label(), 8), row.status.style(), color),
            )?;

            if let Some(error) = &row.error {
                writeln!(
                    f,
                    "  {}",
                    style::paint(
                        &text::truncate(error, 100),
                        arbscope_types::TierStyle::Critical,
                        color
                    )
                )?;
            }
        }
        Ok(())
    }
}
