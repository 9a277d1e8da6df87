use std::fmt;

use arbscope_engine::Snapshot;
use arbscope_types::TierStyle;

use super::{OpportunityTableView, RiskTableView};
use crate::presentation::formatters::time;
use crate::presentation::style;
use crate::presentation::FormatOptions;

/// The full dashboard: header, summary metrics, volatility alerts, then
/// the opportunity and risk tables. Consumes the snapshot it renders.
pub struct OverviewView {
    pub snapshot: Snapshot,
    pub options: FormatOptions,
}

impl fmt::Display for OverviewView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.options.enable_color;
        let snapshot = &self.snapshot;
        let summary = &snapshot.summary;

        writeln!(
            f,
            "{}  {}",
            style::heading("arbscope", color),
            style::dim(
                &format!(
                    "tick #{} · {}",
                    snapshot.version,
                    time::format_relative_time(Some(snapshot.fetched_at))
                ),
                color
            )
        )?;
        if let Some(banner) = &snapshot.banner {
            writeln!(f, "{}", style::dim(banner, color))?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "  tokens {}   24h volume {}   strategies {}/{} active   detected {}   executed profit {}",
            summary.tracked_tokens,
            summary.total_volume_24h_display,
            summary.active_strategies,
            summary.total_strategies,
            summary.detected_opportunities,
            style::paint_signed(
                &summary.executed_profit_display,
                Some(summary.executed_profit_usd),
                color
            ),
        )?;
        writeln!(f)?;

        if summary.volatility_alerts.is_empty() {
            writeln!(
                f,
                "  {}",
                style::paint("market stable: no volatility alerts", TierStyle::Positive, color)
            )?;
        } else {
            for alert in &summary.volatility_alerts {
                writeln!(
                    f,
                    "  {}",
                    style::paint(
                        &format!(
                            "high volatility: {} ({}) at {}",
                            alert.symbol, alert.name, alert.volatility_display
                        ),
                        TierStyle::Caution,
                        color
                    )
                )?;
            }
        }
        writeln!(f)?;

        for (resource, reason) in snapshot.failures() {
            writeln!(
                f,
                "  {}",
                style::paint(
                    &format!("{}: load failed ({})", resource, reason),
                    TierStyle::Critical,
                    color
                )
            )?;
        }

        writeln!(f, "{}", style::heading("Opportunities", color))?;
        let opportunities = OpportunityTableView {
            rows: snapshot.opportunities.clone(),
            state: snapshot.opportunities_state.clone(),
            options: self.options,
        };
        write!(f, "{}", opportunities)?;
        writeln!(f)?;

        writeln!(f, "{}", style::heading("Risk", color))?;
        let risk = RiskTableView {
            rows: snapshot.risk.clone(),
            state: snapshot.risk_state.clone(),
            options: self.options,
        };
        write!(f, "{}", risk)?;

        Ok(())
    }
}
