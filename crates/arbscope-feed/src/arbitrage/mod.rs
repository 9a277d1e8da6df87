//! `/api/arbitrage` — detected cross-DEX price discrepancies.

mod mapper;
mod schema;

use crate::convert::array_field;
use crate::Result;
use arbscope_types::OpportunityRecord;
use serde_json::Value;

/// Parse the arbitrage envelope (`{ "opportunities": [...] }`).
pub fn parse_opportunities(body: &str) -> Result<Vec<OpportunityRecord>> {
    let value: Value = serde_json::from_str(body)?;
    Ok(array_field(&value, "opportunities")
        .into_iter()
        .filter_map(|item| {
            serde_json::from_value::<schema::RawOpportunity>(item.clone())
                .ok()
                .map(mapper::map_opportunity)
        })
        .collect())
}
