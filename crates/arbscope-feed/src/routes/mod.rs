//! `/api/routes` — candidate swap routes for a given notional.

mod mapper;
mod schema;

use crate::convert::array_field;
use crate::Result;
use arbscope_types::RouteRecord;
use serde_json::Value;

/// Parse the routes envelope (`{ "routes": [...] }`).
pub fn parse_routes(body: &str) -> Result<Vec<RouteRecord>> {
    let value: Value = serde_json::from_str(body)?;
    Ok(array_field(&value, "routes")
        .into_iter()
        .filter_map(|item| {
            serde_json::from_value::<schema::RawRoute>(item.clone())
                .ok()
                .map(mapper::map_route)
        })
        .collect())
}
