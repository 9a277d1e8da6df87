use std::fmt;

use arbscope_engine::{LoadState, TokenRow};

use super::write_load_state;
use crate::presentation::formatters::text::pad;
use crate::presentation::style;
use crate::presentation::FormatOptions;

pub struct TokenTableView {
    pub rows: Vec<TokenRow>,
    pub state: LoadState,
    pub options: FormatOptions,
}

impl fmt::Display for TokenTableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if write_load_state(f, "no tokens", self.rows.len(), &self.state, self.options)? {
            return Ok(());
        }
        let color = self.options.enable_color;

        writeln!(
            f,
            "{}",
            style::dim(
                &format!(
                    "{} {} {} {} {} {} {} {} {}",
                    pad("TOKEN", 8),
                    pad("PRICE", 14),
                    pad("24H", 9),
                    pad("7D", 9),
                    pad("VOLUME", 9),
                    pad("LIQUIDITY", 9),
                    pad("VOLATILITY", 14),
                    pad("MKT CAP", 9),
                    pad("SUPPLY", 9),
                ),
                color
            )
        )?;

        for row in &self.rows {
            let volatility = format!("{} {}", row.volatility_tier.label(), row.volatility_display);
            writeln!(
                f,
                "{} {} {} {} {} {} {} {} {}",
                pad(&row.symbol, 8),
                pad(&row.price_display, 14),
                style::paint_signed(&pad(&row.change_24h_display, 9), row.change_24h, color),
                pad(&row.change_7d_display, 9),
                pad(&row.volume_display, 9),
                pad(&row.liquidity_display, 9),
                style::paint(
                    &pad(&volatility, 14),
                    row.volatility_tier.severity_style(),
                    color
                ),
                pad(&row.market_cap_display, 9),
                pad(&row.supply_display, 9),
            )?;
        }
        Ok(())
    }
}
