//! Password hashing and verification for the link password gate.
//!
//! Stored form is the lowercase hex SHA-256 digest of the UTF-8 password
//! bytes. The plaintext is never persisted.

use sha2::{Digest, Sha256};

/// Hashes a password to its stored hex-digest form.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Checks a candidate password against a stored digest.
///
/// The comparison runs in constant time with respect to the stored digest:
/// the candidate is hashed first and the two fixed-length digests are
/// compared without early exit, so response timing does not leak how much
/// of the digest matched.
pub fn verify_password(candidate: &str, stored_hash: &str) -> bool {
    let candidate_hash = hash_password(candidate);
    constant_time_eq(candidate_hash.as_bytes(), stored_hash.as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
