use arbscope_types::num::to_num;
use arbscope_types::TokenRecord;

use super::schema::RawToken;
use crate::convert::id_string;

pub(crate) fn map_token(raw: RawToken) -> TokenRecord {
    let symbol = raw
        .symbol
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("?")
        .to_string();

    TokenRecord {
        id: id_string(&raw.id, || symbol.to_ascii_lowercase()),
        name: raw
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&symbol)
            .to_string(),
        symbol,
        price: to_num(&raw.price),
        change_24h: to_num(&raw.change_24h),
        change_7d: to_num(&raw.change_7d),
        volume_24h: to_num(&raw.volume_24h),
        liquidity: to_num(&raw.liquidity),
        volatility: to_num(&raw.volatility),
        market_cap: to_num(&raw.market_cap),
        fdv: to_num(&raw.fdv),
        circulating_supply: to_num(&raw.circulating_supply),
        total_supply: to_num(&raw.total_supply),
        ath: to_num(&raw.ath),
        atl: to_num(&raw.atl),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_token_coerces_mixed_numerics() {
        let raw: RawToken = serde_json::from_value(json!({
            "id": "ethereum",
            "symbol": "ETH",
            "name": "Ethereum",
            "price": "2011.5",
            "change_24h": -1.2,
            "volume_24h": null,
            "market_cap": "garbage"
        }))
        .unwrap();

        let token = map_token(raw);
        assert_eq!(token.id, "ethereum");
        assert_eq!(token.price, Some(2011.5));
        assert_eq!(token.change_24h, Some(-1.2));
        assert_eq!(token.volume_24h, None);
        assert_eq!(token.market_cap, None);
        assert_eq!(token.change_7d, None);
    }

    #[test]
    fn test_map_token_synthesizes_missing_identity() {
        let raw: RawToken = serde_json::from_value(json!({"symbol": "PEPE"})).unwrap();
        let token = map_token(raw);
        assert_eq!(token.id, "pepe");
        assert_eq!(token.name, "PEPE");
    }
}
