use std::fmt;

use arbscope_engine::{LoadState, StrategyRow};

use super::write_load_state;
use crate::presentation::style;
use crate::presentation::FormatOptions;

/// One block per plan, mirroring the card layout of the original console.
pub struct StrategyCardsView {
    pub rows: Vec<StrategyRow>,
    pub state: LoadState,
    pub options: FormatOptions,
}

impl fmt::Display for StrategyCardsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if write_load_state(f, "no strategies", self.rows.len(), &self.state, self.options)? {
            return Ok(());
        }
        let color = self.options.enable_color;

        for row in &self.rows {
            let title = match &row.plan {
                Some(plan) => format!("{} · {}", row.token, plan),
                None => row.token.clone(),
            };
            writeln!(
                f,
                "{}  {}",
                style::heading(&title, color),
                style::paint(row.status.label(), row.status.style(), color),
            )?;

            writeln!(f, "  invested  {}", row.invested_display)?;
            writeln!(f, "  progress  {}", row.progress_display)?;
            writeln!(
                f,
                "  price     avg {}  now {}",
                row.avg_buy_display, row.current_price_display
            )?;
            writeln!(
                f,
                "  pnl       {} ({})",
                style::paint_signed(&row.pnl_display, row.pnl, color),
                row.pnl_pct_display
            )?;

            let mut schedule = format!("next buy {}", row.next_buy_display);
            if let Some(frequency) = &row.frequency {
                schedule = format!("{} · {}", schedule, frequency);
            }
            writeln!(f, "  {}", style::dim(&schedule, color))?;
            writeln!(f)?;
        }
        Ok(())
    }
}
