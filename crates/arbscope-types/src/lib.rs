pub mod dex;
pub mod domain;
pub mod num;
pub mod tier;

pub use domain::*;
pub use tier::{
    ClassifyDefaults, ExecutionStatus, OpportunityStatus, RiskStatus, StrategyStatus, Thresholds,
    Tier, TierStyle,
};
