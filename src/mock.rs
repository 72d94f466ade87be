//! Placeholder key material and mock encryption.
//!
//! Nothing here is cryptography. Keys are random hex strings from a
//! non-cryptographic RNG and "encryption" is a textual marker around the
//! plaintext. A real implementation would swap this module for actual
//! Kyber / RSA primitives and a CSPRNG.

use rand::RngCore;

const ENCRYPTED_PREFIX: &str = "ENCRYPTED[";
const ENCRYPTED_SUFFIX: &str = "]";

pub const DECRYPTION_FAILED: &str = "Decryption failed";

/// Generate placeholder key material of `size_in_bytes`, rendered as a
/// lowercase hex string of length `2 * size_in_bytes`.
///
/// Uses `rand::thread_rng` — explicitly unsuitable for any security
/// purpose.
pub fn random_hex(size_in_bytes: usize) -> String {
    let mut bytes = vec![0u8; size_in_bytes];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Mock encryption: wrap the message in a fixed marker.
pub fn wrap_message(message: &str) -> String {
    format!("{}{}{}", ENCRYPTED_PREFIX, message, ENCRYPTED_SUFFIX)
}

/// Mock decryption: strip the marker if present.
pub fn unwrap_message(message: &str) -> Option<&str> {
    message
        .strip_prefix(ENCRYPTED_PREFIX)
        .and_then(|rest| rest.strip_suffix(ENCRYPTED_SUFFIX))
}
