use chrono::{Duration, Utc};

use crate::models::{Creator, Stream, Token, TokenRef};

// Helper to create a stream fixture in either lifecycle state
pub fn create_test_stream(id: &str, is_live: bool) -> Stream {
    let now = Utc::now();
    Stream {
        id: id.to_string(),
        title: "$SOL - test stream".to_string(),
        creator: Creator {
            address: "7xKX...3mNp".to_string(),
            display_name: "SolanaAlpha".to_string(),
            avatar: None,
        },
        token: TokenRef {
            address: "So11111111111111111111111111111111111111112".to_string(),
            symbol: "SOL".to_string(),
            name: "Solana".to_string(),
        },
        thumbnail: "https://example.com/thumb.jpg".to_string(),
        viewer_count: if is_live { 100 } else { 0 },
        peak_viewers: 500,
        is_live,
        started_at: now - Duration::hours(1),
        ended_at: if is_live {
            None
        } else {
            Some(now - Duration::minutes(5))
        },
        duration_ms: if is_live { None } else { Some(3_300_000) },
    }
}

// Helper to create a token with full market data
pub fn create_test_token(address: &str, symbol: &str) -> Token {
    Token {
        address: address.to_string(),
        symbol: symbol.to_string(),
        name: symbol.to_string(),
        price: Some(1.0),
        price_change_24h: Some(0.5),
        market_cap: Some(1_000_000.0),
        volume_24h: Some(50_000.0),
    }
}
