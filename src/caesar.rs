use alloc::string::String;

use crate::alphabet::{position, ALPHABET, ALPHABET_SIZE};

/// Shift width used when the caller does not pick one
pub const DEFAULT_SHIFT: i64 = 3;

/// Rotate every alphabet letter `shift` positions forward, wrapping at the end
/// of the alphabet
///
/// Lowercase letters come back lowercase, and characters outside the alphabet
/// pass through unchanged. Any `shift` is valid, including negative ones and
/// multiples of the alphabet size.
pub fn transform(text: &str, shift: i64) -> String {
    // reduce once, so per-letter arithmetic stays within one wrap
    let step = shift.rem_euclid(ALPHABET_SIZE as i64) as usize;

    text.chars()
        .map(|c| match position(c) {
            Some(idx) => {
                let sub = ALPHABET[(idx + step) % ALPHABET_SIZE];
                if c.is_lowercase() {
                    sub.to_lowercase().next().unwrap_or(sub)
                } else {
                    sub
                }
            }
            None => c,
        })
        .collect()
}

/// Encrypt text with a forward shift
pub fn encrypt(text: &str, shift: i64) -> String {
    transform(text, shift)
}

/// Decrypt text produced by `encrypt` with the same shift
pub fn decrypt(text: &str, shift: i64) -> String {
    transform(text, -shift.rem_euclid(ALPHABET_SIZE as i64))
}
