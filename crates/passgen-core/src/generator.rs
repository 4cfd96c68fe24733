//! Password generation
//!
//! The alphabet is always the 52 ASCII letters, optionally followed by the
//! ten digits and then the fixed symbol set. Order matters for
//! [`IndexPolicy::Legacy`], which can never pick the first entry.

use rand::Rng;

use crate::types::{GeneratorConfig, IndexPolicy};

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*-_+=[]{}~`";

/// Build the active alphabet for a config
pub fn alphabet(config: &GeneratorConfig) -> Vec<char> {
    let mut chars: Vec<char> = LETTERS.chars().collect();

    if config.numbers {
        chars.extend(DIGITS.chars());
    }

    if config.symbols {
        chars.extend(SYMBOLS.chars());
    }

    chars
}

/// Generate a password for `config`.
///
/// With [`IndexPolicy::Uniform`] the result always has exactly
/// `config.length()` characters, all drawn from [`alphabet`].
pub fn generate<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    policy: IndexPolicy,
    rng: &mut R,
) -> String {
    let chars = alphabet(config);
    let len = chars.len();

    (0..config.length())
        .filter_map(|_| {
            let index = match policy {
                IndexPolicy::Uniform => rng.gen_range(0..len),
                IndexPolicy::Legacy => rng.gen_range(1..=len),
            };
            // Legacy can land one past the end; that slot yields nothing.
            chars.get(index).copied()
        })
        .collect()
}
