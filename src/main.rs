use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use entropia::entropy::EntropyResult;
use entropia::{caesar, entropy, keyed, transposition};

/// Classical ciphers and Shannon entropy for information theory coursework
#[derive(Parser)]
#[command(name = "entropia", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shift cipher over the Russian alphabet; other characters pass through
    Caesar {
        /// Text to transform
        text: String,

        /// Shift width, in alphabet positions
        #[arg(long, default_value_t = caesar::DEFAULT_SHIFT, allow_negative_numbers = true)]
        shift: i64,

        /// Decrypt instead of encrypt
        #[arg(short, long)]
        decrypt: bool,
    },

    /// Additive key cipher; text and key are uppercased, other characters dropped
    Key {
        /// Text to transform
        text: String,

        /// Repeating key, at least one alphabet letter
        #[arg(short, long)]
        key: String,

        /// Decrypt instead of encrypt
        #[arg(short, long)]
        decrypt: bool,
    },

    /// Columnar transposition; spaces are written as underscores
    Transpose {
        /// Text to transform
        text: String,

        /// Number of grid columns
        #[arg(long, default_value_t = transposition::DEFAULT_COLS)]
        cols: usize,

        /// Decrypt instead of encrypt
        #[arg(short, long)]
        decrypt: bool,
    },

    /// Shannon entropy of a probability distribution, in four units
    Entropy {
        /// Probabilities of the alphabet symbols; must sum to one
        #[arg(
            required_unless_present = "text",
            conflicts_with = "text",
            allow_negative_numbers = true
        )]
        probs: Vec<f64>,

        /// Measure the character distribution of this text instead
        #[arg(short, long)]
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Commands::Caesar {
            text,
            shift,
            decrypt,
        } => {
            let res = if decrypt {
                caesar::decrypt(&text, shift)
            } else {
                caesar::encrypt(&text, shift)
            };
            log::debug!("caesar shift {} over {} chars", shift, text.chars().count());
            println!("{}", res);
        }
        Commands::Key { text, key, decrypt } => {
            let res = if decrypt {
                keyed::decrypt(&text, &key)
            } else {
                keyed::encrypt(&text, &key)
            };
            log::debug!("key cipher kept {} of {} chars", res.chars().count(), text.chars().count());
            println!("{}", res);
        }
        Commands::Transpose {
            text,
            cols,
            decrypt,
        } => {
            let res = if decrypt {
                transposition::decrypt(&text, cols)
            } else {
                transposition::encrypt(&text, cols)
            };
            log::debug!("transposition over {} columns", cols);
            println!("{}", res);
        }
        Commands::Entropy { probs, text } => {
            let res = match text {
                Some(text) => entropy::compute_all_from_text(&text),
                None => {
                    validate(&probs)?;
                    entropy::compute_all(&probs)
                }
            };
            print_result(&res);
        }
    }

    Ok(())
}

/// Check the values form a probability distribution: finite, non-negative,
/// and summing to one within the slack hand-entered decimals need
fn validate(probs: &[f64]) -> Result<()> {
    if probs.iter().any(|p| !p.is_finite() || *p < 0.0) {
        bail!("probabilities must be finite and non-negative");
    }

    let sum: f64 = probs.iter().sum();
    if (sum - 1.0).abs() >= 0.001 {
        bail!("probabilities must sum to 1.0 (got {})", sum);
    }

    Ok(())
}

fn print_result(res: &EntropyResult) {
    println!("Shannon entropy over {} symbols", res.alphabet_size);
    println!("  binary (log2)     {:>12.4}  bits", res.bits);
    println!("  natural (ln)      {:>12.4}  nats", res.nats);
    println!("  decimal (log10)   {:>12.4}  hartleys", res.hartleys);
    println!(
        "  alphabet (logM)   {:>12.4}  base-{} units",
        res.alphabet_units, res.alphabet_size
    );
}
