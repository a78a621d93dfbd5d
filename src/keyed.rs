use alloc::string::String;
use alloc::vec::Vec;

use crate::alphabet::{position, ALPHABET, ALPHABET_SIZE};
use crate::Mode;

/// Alphabet positions of the letters in `text`, both cases accepted
///
/// Everything outside the alphabet is dropped, so the result can be shorter
/// than the input (or empty).
fn letter_positions(text: &str) -> Vec<usize> {
    text.chars().filter_map(position).collect()
}

/// Combine text and key letters pairwise, the key repeating as needed
///
/// Letters are numbered 1..=ALPHABET_SIZE here. The sum (or difference) of two
/// such numbers is off the scale by at most one alphabet length, so a single
/// wraparound correction restores the range.
fn combine(text: &str, key: &str, mode: Mode) -> String {
    let text = letter_positions(text);
    let key = letter_positions(key);

    if text.is_empty() || key.is_empty() {
        return String::new();
    }

    text.iter()
        .enumerate()
        .map(|(i, &t)| {
            let t = t + 1;
            let k = key[i % key.len()] + 1;
            let mut s = match mode {
                Mode::Encrypt => t + k,
                Mode::Decrypt => t + ALPHABET_SIZE - k,
            };
            if s > ALPHABET_SIZE {
                s -= ALPHABET_SIZE;
            }
            ALPHABET[s - 1]
        })
        .collect()
}

/// Encrypt by adding the repeating key to the text, letter by letter
///
/// Both inputs are normalized first: uppercased, with everything outside the
/// alphabet dropped. If either side has no letters left, the result is empty.
pub fn encrypt(text: &str, key: &str) -> String {
    combine(text, key, Mode::Encrypt)
}

/// Decrypt text produced by `encrypt` with the same key
pub fn decrypt(text: &str, key: &str) -> String {
    combine(text, key, Mode::Decrypt)
}
