use serde::{Deserialize, Serialize};

/// A tradable asset referenced by a stream. Market fields are optional
/// because not every fixture carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub price: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::create_test_token;

    #[test]
    fn test_token_serde_roundtrip() {
        let token = create_test_token("So11111111111111111111111111111111111111112", "SOL");
        let json = serde_json::to_string(&token).unwrap();
        let parsed: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, token);
    }

    #[test]
    fn test_market_fields_are_optional() {
        let json = r#"{
            "address": "So11111111111111111111111111111111111111112",
            "symbol": "SOL",
            "name": "Solana",
            "price": null,
            "price_change_24h": null,
            "market_cap": null,
            "volume_24h": null
        }"#;
        let parsed: Token = serde_json::from_str(json).unwrap();
        assert!(parsed.price.is_none());
        assert!(parsed.volume_24h.is_none());
    }
}
