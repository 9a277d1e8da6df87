use std::fmt;

use arbscope_engine::{LoadState, RiskRow};
use arbscope_types::TierStyle;

use super::write_load_state;
use crate::presentation::formatters::text::pad;
use crate::presentation::style;
use crate::presentation::FormatOptions;

pub struct RiskTableView {
    pub rows: Vec<RiskRow>,
    pub state: LoadState,
    pub options: FormatOptions,
}

impl fmt::Display for RiskTableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if write_load_state(f, "no positions", self.rows.len(), &self.state, self.options)? {
            return Ok(());
        }
        let color = self.options.enable_color;

        writeln!(
            f,
            "{}",
            style::dim(
                &format!(
                    "{} {} {} {} {} {} {} {}",
                    pad("TOKEN", 8),
                    pad("PRICE", 13),
                    pad("STOP LOSS", 13),
                    pad("POSITION", 10),
                    pad("MAX DD", 8),
                    pad("RISK", 14),
                    pad("SHARPE", 7),
                    pad("STATUS", 10),
                ),
                color
            )
        )?;

        for row in &self.rows {
            let risk = format!("{} ({})", row.risk_tier.label(), row.risk_score_display);
            let sharpe_style = if row.sharpe_healthy {
                TierStyle::Positive
            } else {
                TierStyle::Critical
            };
            writeln!(
                f,
                "{} {} {} {} {} {} {} {}",
                pad(&row.symbol, 8),
                pad(&row.price_display, 13),
                pad(&row.stop_loss_display, 13),
                pad(&row.position_display, 10),
                pad(&row.drawdown_display, 8),
                style::paint(&pad(&risk, 14), row.risk_tier.severity_style(), color),
                style::paint(&pad(&row.sharpe_display, 7), sharpe_style, color),
                style::paint(&pad(row.status.label(), 10), row.status.style(), color),
            )?;
        }
        Ok(())
    }
}
