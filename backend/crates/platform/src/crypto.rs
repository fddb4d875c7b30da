//! Cryptographic Utilities
//!
//! Provides low-level cryptographic primitives:
//! - Secure random byte generation
//! - Constant-time comparison

use rand::RngCore;
use rand::rngs::OsRng;

/// Generate cryptographically secure random bytes
///
/// Uses the operating system's CSPRNG.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Constant-time comparison of two byte slices
///
/// Prevents timing attacks when comparing secrets. Returns `false`
/// immediately on length mismatch; the length of a secret is not
/// considered secret here.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
