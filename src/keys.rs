use rand::Rng;

/// Every issued stream key carries this prefix.
pub const STREAM_KEY_PREFIX: &str = "live_";

const KEY_LENGTH: usize = 32;

/// Generates a stream key: `live_` plus 32 characters sampled uniformly
/// from `[A-Za-z0-9]`. Uniqueness is not checked against previously
/// issued keys; callers that persist keys must enforce it themselves.
pub fn generate_stream_key() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(KEY_LENGTH)
        .map(char::from)
        .collect();

    format!("{}{}", STREAM_KEY_PREFIX, suffix)
}
