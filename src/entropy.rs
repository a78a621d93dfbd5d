use alloc::vec::Vec;

use hashbrown::HashMap;
use libm::log;

/// Shannon entropy of a probability distribution, `-sum(p * log_base(p))`
///
/// Zero probabilities contribute nothing and are skipped, and an empty
/// distribution carries no information, so both are safe to pass. The caller
/// picks the logarithm base; anything greater than one is meaningful.
pub fn shannon(probs: &[f64], base: f64) -> f64 {
    if probs.is_empty() {
        return 0.0;
    }

    let ln_base = log(base);
    let h: f64 = probs
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * (log(p) / ln_base))
        .sum();

    // keep the degenerate cases at plain zero
    if h == 0.0 {
        0.0
    } else {
        -h
    }
}

/// Relative frequency of every distinct character of `text`, in order of
/// first appearance
///
/// Characters are compared exactly, case included. Empty text gives an empty
/// distribution.
pub fn distribution_from_text(text: &str) -> Vec<f64> {
    let mut counts: HashMap<char, f64> = HashMap::new();
    let mut order: Vec<char> = Vec::new();
    let mut total = 0.0_f64;

    for c in text.chars() {
        if let Some(count) = counts.get_mut(&c) {
            *count += 1.0;
        } else {
            counts.insert(c, 1.0);
            order.push(c);
        }
        total += 1.0;
    }

    order.iter().map(|c| counts[c] / total).collect()
}

/// Entropy of one distribution in every unit the tool reports
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyResult {
    /// Base-2 entropy, in bits
    pub bits: f64,
    /// Base-e entropy, in nats
    pub nats: f64,
    /// Base-10 entropy, in hartleys
    pub hartleys: f64,
    /// Base-M entropy, where M is the distribution size; zero when M < 2
    pub alphabet_units: f64,
    /// M, the number of entries in the distribution
    pub alphabet_size: usize,
}

/// Measure `probs` in bits, nats, hartleys and alphabet units at once
///
/// The alphabet unit takes the distribution size M as its base, which only
/// makes sense for M > 1; smaller distributions report zero.
pub fn compute_all(probs: &[f64]) -> EntropyResult {
    let m = probs.len();

    EntropyResult {
        bits: shannon(probs, 2.0),
        nats: shannon(probs, core::f64::consts::E),
        hartleys: shannon(probs, 10.0),
        alphabet_units: if m > 1 { shannon(probs, m as f64) } else { 0.0 },
        alphabet_size: m,
    }
}

/// Measure the character distribution of `text` in all four units
pub fn compute_all_from_text(text: &str) -> EntropyResult {
    compute_all(&distribution_from_text(text))
}
