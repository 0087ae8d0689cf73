//! Short code generation and custom alias validation.
//!
//! Generation draws from the system CSPRNG: predictable codes would let an
//! attacker enumerate short links, so a seedable PRNG is not acceptable here.

use crate::error::Rejection;
use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

/// Alphabet for generated codes: digits, lowercase, uppercase.
const CODE_ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default generated code length. 62^6 possible codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Maximum length of a caller-supplied alias.
pub const MAX_ALIAS_LENGTH: usize = 50;

/// Generates a random short code of `length` characters from [`CODE_ALPHABET`].
///
/// Each character is drawn uniformly and independently via `OsRng`.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code(length: usize) -> String {
    let mut rng = OsRng.unwrap_err();

    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Validates a caller-supplied custom alias.
///
/// Purely syntactic: uniqueness is the creation flow's job.
///
/// # Rules
///
/// - At most [`MAX_ALIAS_LENGTH`] characters
/// - Non-empty, only `[A-Za-z0-9_-]`
///
/// # Errors
///
/// [`Rejection::AliasTooLong`] or [`Rejection::AliasInvalidCharacters`].
pub fn validate_alias(alias: &str) -> Result<(), Rejection> {
    if alias.len() > MAX_ALIAS_LENGTH {
        return Err(Rejection::AliasTooLong {
            max: MAX_ALIAS_LENGTH,
        });
    }

    if alias.is_empty()
        || !alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(Rejection::AliasInvalidCharacters);
    }

    Ok(())
}
