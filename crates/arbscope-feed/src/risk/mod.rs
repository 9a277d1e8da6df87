//! `/api/risk_management` — position sizing and risk metrics.

mod mapper;
mod schema;

use crate::convert::array_field;
use crate::Result;
use arbscope_types::RiskRecord;
use serde_json::Value;

/// Parse the risk envelope (`{ "risk_data": [...] }`).
pub fn parse_risk(body: &str) -> Result<Vec<RiskRecord>> {
    let value: Value = serde_json::from_str(body)?;
    Ok(array_field(&value, "risk_data")
        .into_iter()
        .filter_map(|item| {
            serde_json::from_value::<schema::RawRisk>(item.clone())
                .ok()
                .map(mapper::map_risk)
        })
        .collect())
}
