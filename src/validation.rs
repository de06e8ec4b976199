/// Minimum and maximum length of a Base58-encoded Solana address.
const MIN_ADDRESS_LEN: usize = 32;
const MAX_ADDRESS_LEN: usize = 44;

/// Syntactic Base58 check for a token mint address: allowed alphabet
/// (1-9, A-Z without I/O, a-z without l) and length 32..=44. Does not
/// verify checksums, existence, or any on-chain state.
pub fn validate_token_address(address: &str) -> bool {
    if address.len() < MIN_ADDRESS_LEN || address.len() > MAX_ADDRESS_LEN {
        return false;
    }
    address.chars().all(is_base58_char)
}

fn is_base58_char(c: char) -> bool {
    matches!(c, '1'..='9' | 'A'..='H' | 'J'..='N' | 'P'..='Z' | 'a'..='k' | 'm'..='z')
}
