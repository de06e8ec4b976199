//! Static stream, token and chat fixtures standing in for a real backend.
//!
//! The collections are built once per process on first access and are
//! immutable afterwards. Every query is a synchronous read; "not found"
//! is an `Option`, never an error.

use chrono::{Duration, Utc};
use lazy_static::lazy_static;

use crate::models::{ChatMessage, Creator, Stream, Token, TokenRef};

lazy_static! {
    static ref STREAMS: Vec<Stream> = seed_streams();
    static ref TOKENS: Vec<Token> = seed_tokens();
    static ref CHAT_MESSAGES: Vec<ChatMessage> = seed_chat_messages();
}

/// All stream fixtures, insertion order.
pub fn streams() -> &'static [Stream] {
    &STREAMS
}

/// All token fixtures, insertion order.
pub fn tokens() -> &'static [Token] {
    &TOKENS
}

/// The canned chat history, oldest first.
pub fn chat_messages() -> &'static [ChatMessage] {
    &CHAT_MESSAGES
}

/// Streams currently live, in collection order. No extra sorting.
pub fn live_streams() -> Vec<&'static Stream> {
    STREAMS.iter().filter(|s| s.is_live).collect()
}

/// Streams that have ended, in collection order.
pub fn ended_streams() -> Vec<&'static Stream> {
    STREAMS.iter().filter(|s| !s.is_live).collect()
}

/// First stream with a matching id. Ids are unique by construction,
/// not enforced.
pub fn stream_by_id(id: &str) -> Option<&'static Stream> {
    STREAMS.iter().find(|s| s.id == id)
}

/// First token with a matching mint address.
pub fn token_by_address(address: &str) -> Option<&'static Token> {
    TOKENS.iter().find(|t| t.address == address)
}

fn seed_streams() -> Vec<Stream> {
    let now = Utc::now();
    vec![
        Stream {
            id: "1".to_string(),
            title: "$SOL - watching this breakout 👀".to_string(),
            creator: Creator {
                address: "7xKX...3mNp".to_string(),
                display_name: "SolanaAlpha".to_string(),
                avatar: Some(
                    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop"
                        .to_string(),
                ),
            },
            token: TokenRef {
                address: "So11111111111111111111111111111111111111112".to_string(),
                symbol: "SOL".to_string(),
                name: "Solana".to_string(),
            },
            thumbnail:
                "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=800&auto=format&fit=crop&q=80"
                    .to_string(),
            viewer_count: 1247,
            peak_viewers: 1850,
            is_live: true,
            started_at: now - Duration::minutes(40),
            ended_at: None,
            duration_ms: None,
        },
        Stream {
            id: "2".to_string(),
            title: "$JUP looking strong here".to_string(),
            creator: Creator {
                address: "9aBC...xYz2".to_string(),
                display_name: "JupiterTrader".to_string(),
                avatar: Some(
                    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop"
                        .to_string(),
                ),
            },
            token: TokenRef {
                address: "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN".to_string(),
                symbol: "JUP".to_string(),
                name: "Jupiter".to_string(),
            },
            thumbnail:
                "https://plus.unsplash.com/premium_photo-1664297604107-061748386611?w=800&auto=format&fit=crop&q=80"
                    .to_string(),
            viewer_count: 856,
            peak_viewers: 1100,
            is_live: true,
            started_at: now - Duration::minutes(90),
            ended_at: None,
            duration_ms: None,
        },
        Stream {
            id: "3".to_string(),
            title: "$WIF support levels explained".to_string(),
            creator: Creator {
                address: "4dEF...kLm9".to_string(),
                display_name: "WifDAO".to_string(),
                avatar: Some(
                    "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=100&h=100&fit=crop"
                        .to_string(),
                ),
            },
            token: TokenRef {
                address: "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzLHYxdM65zcjm".to_string(),
                symbol: "WIF".to_string(),
                name: "dogwifhat".to_string(),
            },
            thumbnail:
                "https://images.unsplash.com/photo-1535320903710-d993d3d77d29?w=800&auto=format&fit=crop&q=80"
                    .to_string(),
            viewer_count: 0,
            peak_viewers: 2100,
            is_live: false,
            started_at: now - Duration::hours(24),
            ended_at: Some(now - Duration::hours(23)),
            duration_ms: Some(3_600_000),
        },
        Stream {
            id: "4".to_string(),
            title: "$BONK - daily TA session".to_string(),
            creator: Creator {
                address: "2gHI...nOp5".to_string(),
                display_name: "BonkMaster".to_string(),
                avatar: None,
            },
            token: TokenRef {
                address: "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263".to_string(),
                symbol: "BONK".to_string(),
                name: "Bonk".to_string(),
            },
            thumbnail:
                "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=800&auto=format&fit=crop&q=80"
                    .to_string(),
            viewer_count: 0,
            peak_viewers: 1650,
            is_live: false,
            started_at: now - Duration::hours(48),
            ended_at: Some(now - Duration::hours(46)),
            duration_ms: Some(7_200_000),
        },
    ]
}

fn seed_tokens() -> Vec<Token> {
    vec![
        Token {
            address: "So11111111111111111111111111111111111111112".to_string(),
            symbol: "SOL".to_string(),
            name: "Solana".to_string(),
            price: Some(178.45),
            price_change_24h: Some(5.4),
            market_cap: Some(65_000_000_000.0),
            volume_24h: Some(2_500_000_000.0),
        },
        Token {
            address: "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN".to_string(),
            symbol: "JUP".to_string(),
            name: "Jupiter".to_string(),
            price: Some(1.24),
            price_change_24h: Some(8.9),
            market_cap: Some(1_700_000_000.0),
            volume_24h: Some(180_000_000.0),
        },
        Token {
            address: "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzLHYxdM65zcjm".to_string(),
            symbol: "WIF".to_string(),
            name: "dogwifhat".to_string(),
            price: Some(2.85),
            price_change_24h: Some(-2.1),
            market_cap: Some(2_800_000_000.0),
            volume_24h: Some(420_000_000.0),
        },
        Token {
            address: "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263".to_string(),
            symbol: "BONK".to_string(),
            name: "Bonk".to_string(),
            price: Some(0.00002345),
            price_change_24h: Some(12.5),
            market_cap: Some(1_500_000_000.0),
            volume_24h: Some(125_000_000.0),
        },
    ]
}

fn seed_chat_messages() -> Vec<ChatMessage> {
    let now = Utc::now();
    vec![
        ChatMessage::new(
            "1",
            "SolTrader",
            "7xKX...3mNp",
            "Great analysis! 🔥",
            now - Duration::seconds(60),
        ),
        ChatMessage::new(
            "2",
            "CryptoNinja",
            "9aBC...xYz2",
            "What's your take on the current market?",
            now - Duration::seconds(45),
        ),
        ChatMessage::new(
            "3",
            "DeFiMaxi",
            "4dEF...kLm9",
            "This is why I love this platform",
            now - Duration::seconds(30),
        ),
        ChatMessage::new(
            "4",
            "ChainExplorer",
            "2gHI...nOp5",
            "Can you show the 4H chart?",
            now - Duration::seconds(15),
        ),
    ]
}
