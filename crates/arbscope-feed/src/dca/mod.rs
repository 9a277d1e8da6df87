//! `/api/dca_data` and `/api/execution_log` — scheduled accumulation plans
//! and their trade log.

mod mapper;
mod schema;

use crate::convert::array_field;
use crate::Result;
use arbscope_types::{ExecutionRecord, StrategyRecord};
use serde_json::Value;

/// Parse the DCA envelope (`{ "strategies": [...] }`).
pub fn parse_strategies(body: &str) -> Result<Vec<StrategyRecord>> {
    let value: Value = serde_json::from_str(body)?;
    Ok(array_field(&value, "strategies")
        .into_iter()
        .filter_map(|item| {
            serde_json::from_value::<schema::RawStrategy>(item.clone())
                .ok()
                .map(mapper::map_strategy)
        })
        .collect())
}

/// Parse the execution log. The endpoint has shipped both a bare array and
/// a `{ "log": [...] }` envelope; accept either.
pub fn parse_execution_log(body: &str) -> Result<Vec<ExecutionRecord>> {
    let value: Value = serde_json::from_str(body)?;
    let items: Vec<&Value> = match value.as_array() {
        Some(entries) => entries.iter().collect(),
        None => array_field(&value, "log"),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| {
            serde_json::from_value::<schema::RawExecution>(item.clone())
                .ok()
                .map(mapper::map_execution)
        })
        .collect())
}
