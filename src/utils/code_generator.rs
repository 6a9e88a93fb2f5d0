//! Short id generation.
//!
//! Provides cryptographically secure random short ids for link minting.

/// Length of random bytes before base64 encoding.
const SHORT_ID_BYTES: usize = 6;

/// Generates a cryptographically secure random short id.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character id. The id space is 2^48, so a
/// collision on insert is astronomically rare; callers still retry a bounded
/// number of times against the registry's uniqueness constraint.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_short_id() -> String {
    use base64::Engine as _;

    let mut buffer = [0u8; SHORT_ID_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
