mod opportunity;
mod risk;
mod route;
mod strategy;
mod token;

pub use opportunity::OpportunityRecord;
pub use risk::RiskRecord;
pub use route::RouteRecord;
pub use strategy::{ExecutionRecord, StrategyRecord};
pub use token::TokenRecord;
