//! Heuristic classification of stored values as ciphertext or plaintext.
//!
//! A value "looks encrypted" when it is shaped like base64, actually
//! decodes, and is at least [`MIN_CIPHERTEXT_LEN`] characters. This is a
//! heuristic, not a guarantee: a short ciphertext classifies as plain, and
//! a long base64-shaped plaintext classifies as encrypted. Both interceptor
//! directions are written to tolerate the misclassification (skip instead
//! of fail), so the cost of a false answer is a value left as stored.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum length for a value to be considered ciphertext. RSA-2048 field
/// ciphertext is 512 hex chars, so real ciphertext clears this comfortably.
pub const MIN_CIPHERTEXT_LEN: usize = 100;

static BASE64_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").expect("base64 shape pattern"));

/// Returns true when `value` is plausibly ciphertext already.
pub fn looks_encrypted(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if !BASE64_SHAPE.is_match(value) {
        return false;
    }
    if STANDARD.decode(value).is_err() {
        return false;
    }
    value.len() >= MIN_CIPHERTEXT_LEN
}

/// Inverse of [`looks_encrypted`].
pub fn looks_plain(value: &str) -> bool {
    !looks_encrypted(value)
}
