use serde::{Deserialize, Serialize};

/// Semantic display style carried by every tier and status.
///
/// Renderers map these to concrete colors at the edge; nothing below the
/// presentation layer knows about terminals or themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierStyle {
    Positive,
    Caution,
    Critical,
    Info,
    Muted,
}

/// Graded classification bucket for a continuous metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Medium => "Medium",
            Tier::High => "High",
        }
    }

    /// Style for quantities where High is bad (risk, volatility, gas).
    pub fn severity_style(&self) -> TierStyle {
        match self {
            Tier::Low => TierStyle::Positive,
            Tier::Medium => TierStyle::Caution,
            Tier::High => TierStyle::Critical,
        }
    }

    /// Style for quantities where High is good (route efficiency).
    pub fn quality_style(&self) -> TierStyle {
        match self {
            Tier::Low => TierStyle::Critical,
            Tier::Medium => TierStyle::Caution,
            Tier::High => TierStyle::Positive,
        }
    }
}

/// Ascending two-boundary ladder over [Low, Medium, High].
///
/// Boundaries are inclusive-low/exclusive-high: the first boundary with
/// `value < boundary` selects the tier, and a value at or above every
/// boundary lands in the final tier. `classify(0.3)` with boundaries
/// [0.3, 0.7] is therefore Medium, not Low.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub low: f64,
    pub high: f64,
}

impl Thresholds {
    /// Composite risk score in [0, 1].
    pub const RISK_SCORE: Thresholds = Thresholds { low: 0.3, high: 0.7 };
    /// 24h volatility, percent.
    pub const VOLATILITY_PCT: Thresholds = Thresholds { low: 5.0, high: 15.0 };
    /// Estimated gas cost for a route, USD.
    pub const GAS_COST_USD: Thresholds = Thresholds { low: 30.0, high: 60.0 };
    /// Route efficiency, percent. High means high efficiency.
    pub const EFFICIENCY_PCT: Thresholds = Thresholds { low: 90.0, high: 95.0 };

    pub fn classify(&self, value: f64) -> Tier {
        let ladder = [(self.low, Tier::Low), (self.high, Tier::Medium)];
        for (boundary, tier) in ladder {
            if value < boundary {
                return tier;
            }
        }
        Tier::High
    }

    /// Classify a normalized value, falling back to an explicit default
    /// for absent input. The defaults differ per quantity and live in
    /// [`ClassifyDefaults`], not here.
    pub fn classify_or(&self, value: Option<f64>, missing: Tier) -> Tier {
        value.map(|v| self.classify(v)).unwrap_or(missing)
    }
}

/// Per-quantity defaults applied when a classification input is absent.
///
/// The upstream feed is inconsistent here (a missing risk score is treated
/// as dangerous, a missing gas estimate as cheap), so the policy is carried
/// as configuration rather than baked into call sites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyDefaults {
    pub risk: Tier,
    pub volatility: Tier,
    pub gas: Tier,
    pub efficiency: Tier,
}

impl Default for ClassifyDefaults {
    fn default() -> Self {
        Self {
            risk: Tier::High,
            volatility: Tier::Low,
            gas: Tier::Low,
            efficiency: Tier::Low,
        }
    }
}

/// Lifecycle of a detected arbitrage opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStatus {
    Detected,
    Executed,
    Failed,
    Expired,
    Unknown,
}

impl OpportunityStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "detected" => Self::Detected,
            "executed" => Self::Executed,
            "failed" => Self::Failed,
            "expired" => Self::Expired,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Detected => "Detected",
            Self::Executed => "Executed",
            Self::Failed => "Failed",
            Self::Expired => "Expired",
            Self::Unknown => "Unknown",
        }
    }

    pub fn style(&self) -> TierStyle {
        match self {
            Self::Detected => TierStyle::Info,
            Self::Executed => TierStyle::Positive,
            Self::Failed => TierStyle::Critical,
            Self::Expired | Self::Unknown => TierStyle::Muted,
        }
    }
}

/// Lifecycle of a scheduled accumulation (DCA) strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyStatus {
    Active,
    Paused,
    Completed,
    Error,
    Unknown,
}

impl StrategyStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "paused" => Self::Paused,
            "completed" => Self::Completed,
            "error" => Self::Error,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
            Self::Error => "Error",
            Self::Unknown => "Unknown",
        }
    }

    pub fn style(&self) -> TierStyle {
        match self {
            Self::Active => TierStyle::Positive,
            Self::Paused => TierStyle::Caution,
            Self::Completed => TierStyle::Info,
            Self::Error => TierStyle::Critical,
            Self::Unknown => TierStyle::Muted,
        }
    }
}

/// Position state reported by the risk endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    Active,
    HighRisk,
    Unknown,
}

impl RiskStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "high_risk" => Self::HighRisk,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::HighRisk => "High Risk",
            Self::Unknown => "Unknown",
        }
    }

    pub fn style(&self) -> TierStyle {
        match self {
            Self::Active => TierStyle::Positive,
            Self::HighRisk => TierStyle::Critical,
            Self::Unknown => TierStyle::Muted,
        }
    }
}

/// Outcome of one strategy execution log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    Success,
    Failed,
    Pending,
    Unknown,
}

impl ExecutionStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "failed" => Self::Failed,
            "pending" => Self::Pending,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failed => "Failed",
            Self::Pending => "Pending",
            Self::Unknown => "Unknown",
        }
    }

    pub fn style(&self) -> TierStyle {
        match self {
            Self::Success => TierStyle::Positive,
            Self::Failed => TierStyle::Critical,
            Self::Pending => TierStyle::Caution,
            Self::Unknown => TierStyle::Muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries_are_inclusive_low_exclusive_high() {
        let t = Thresholds::RISK_SCORE;
        assert_eq!(t.classify(0.29), Tier::Low);
        assert_eq!(t.classify(0.3), Tier::Medium);
        assert_eq!(t.classify(0.69), Tier::Medium);
        assert_eq!(t.classify(0.7), Tier::High);
        assert_eq!(t.classify(1.5), Tier::High);
    }

    #[test]
    fn test_classify_or_uses_missing_default() {
        let t = Thresholds::RISK_SCORE;
        assert_eq!(t.classify_or(None, Tier::High), Tier::High);
        assert_eq!(t.classify_or(Some(0.1), Tier::High), Tier::Low);
    }

    #[test]
    fn test_status_lookup_falls_back_to_unknown() {
        assert_eq!(OpportunityStatus::from_raw("executed"), OpportunityStatus::Executed);
        assert_eq!(OpportunityStatus::from_raw("EXECUTED"), OpportunityStatus::Executed);
        assert_eq!(OpportunityStatus::from_raw("???"), OpportunityStatus::Unknown);
        assert_eq!(RiskStatus::from_raw("high_risk"), RiskStatus::HighRisk);
        assert_eq!(StrategyStatus::from_raw("paused"), StrategyStatus::Paused);
        assert_eq!(ExecutionStatus::from_raw(""), ExecutionStatus::Unknown);
    }

    #[test]
    fn test_default_policy_mirrors_observed_feed() {
        let d = ClassifyDefaults::default();
        assert_eq!(d.risk, Tier::High);
        assert_eq!(d.volatility, Tier::Low);
        assert_eq!(d.gas, Tier::Low);
    }
}
