//! `/api/market_data` — monitored tokens and their market metrics.

mod mapper;
mod schema;

use crate::convert::array_field;
use crate::Result;
use arbscope_types::TokenRecord;
use serde_json::Value;

/// Parse the market-data envelope (`{ "tokens": [...] }`) into normalized
/// records. Elements that are not objects are skipped; every surviving
/// record is fully coerced.
pub fn parse_tokens(body: &str) -> Result<Vec<TokenRecord>> {
    let value: Value = serde_json::from_str(body)?;
    Ok(array_field(&value, "tokens")
        .into_iter()
        .filter_map(|item| {
            serde_json::from_value::<schema::RawToken>(item.clone())
                .ok()
                .map(mapper::map_token)
        })
        .collect())
}
