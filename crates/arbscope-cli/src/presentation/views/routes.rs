use std::fmt;

use arbscope_engine::{LoadState, RouteRow};
use arbscope_types::TierStyle;

use super::write_load_state;
use crate::presentation::formatters::text::pad;
use crate::presentation::style;
use crate::presentation::FormatOptions;

pub struct RouteTableView {
    pub rows: Vec<RouteRow>,
    pub state: LoadState,
    pub options: FormatOptions,
}

impl fmt::Display for RouteTableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if write_load_state(f, "no routes", self.rows.len(), &self.state, self.options)? {
            return Ok(());
        }
        let color = self.options.enable_color;

        writeln!(
            f,
            "{}",
            style::dim(
                &format!(
                    "{} {} {} {} {} {} {} {}",
                    pad("PAIR", 14),
                    pad("VENUE", 14),
                    pad("AMOUNT", 11),
                    pad("EXPECTED", 20),
                    pad("GAS", 15),
                    pad("SLIPPAGE", 13),
                    pad("EFFICIENCY", 16),
                    pad("TIME", 7),
                ),
                color
            )
        )?;

        for row in &self.rows {
            let gas = format!("{} {}", row.gas_tier.label(), row.gas_display);
            let slippage = if row.slippage_warning {
                format!("{} !", row.slippage_display)
            } else {
                row.slippage_display.clone()
            };
            let slippage_style = if row.slippage_warning {
                TierStyle::Critical
            } else {
                TierStyle::Muted
            };
            let efficiency =
                format!("{} {}", row.efficiency_tier.label(), row.efficiency_display);

            writeln!(
                f,
                "{} {} {} {} {} {} {} {}",
                pad(&row.pair, 14),
                pad(&row.dex, 14),
                pad(&row.amount_display, 11),
                pad(&row.expected_display, 20),
                style::paint(&pad(&gas, 15), row.gas_tier.severity_style(), color),
                style::paint(&pad(&slippage, 13), slippage_style, color),
                style::paint(
                    &pad(&efficiency, 16),
                    row.efficiency_tier.quality_style(),
                    color
                ),
                style::dim(&pad(&row.time_display, 7), color),
            )?;

            if row.path.len() > 2 {
                writeln!(
                    f,
                    "  {}",
                    style::dim(&format!("path: {}", row.path.join(" → ")), color)
                )?;
            }
        }
        Ok(())
    }
}
