use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub address: String,
    pub display_name: String,
    pub avatar: Option<String>,
}

/// The token a stream is about, as embedded in the stream record.
/// Market data lives on [`crate::models::Token`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRef {
    pub address: String,
    pub symbol: String,
    pub name: String,
}

/// One livestream session tied to a token.
///
/// A live stream has no `ended_at`/`duration`; an ended stream reports
/// `viewer_count` as zero and carries both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub id: String,
    pub title: String,
    pub creator: Creator,
    pub token: TokenRef,
    pub thumbnail: String,
    pub viewer_count: u32,
    pub peak_viewers: u32,
    pub is_live: bool,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    /// Length of an ended stream, in milliseconds.
    pub duration_ms: Option<u64>,
}

impl Stream {
    pub fn has_ended(&self) -> bool {
        !self.is_live
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::common::create_test_stream;

    #[test]
    fn test_live_stream_shape() {
        let stream = create_test_stream("1", true);
        assert!(!stream.has_ended());
        assert!(stream.ended_at.is_none());
        assert!(stream.duration_ms.is_none());
    }

    #[test]
    fn test_ended_stream_shape() {
        let stream = create_test_stream("2", false);
        assert!(stream.has_ended());
        assert_eq!(stream.viewer_count, 0);
        assert!(stream.ended_at.is_some());
        assert!(stream.duration_ms.is_some());
    }
}
