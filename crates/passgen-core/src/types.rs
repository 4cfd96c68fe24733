//! Core domain types shared by the generator, scorer and application layer

use serde::{Deserialize, Serialize};

/// Shortest password the length slider allows
pub const MIN_LENGTH: usize = 6;

/// Longest password the length slider allows
pub const MAX_LENGTH: usize = 100;

/// Length used when nothing else is configured
pub const DEFAULT_LENGTH: usize = 8;

/// User-selected generation constraints.
///
/// `length` is always within `MIN_LENGTH..=MAX_LENGTH`; every constructor and
/// mutator clamps, so downstream code never has to re-check the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GeneratorConfig {
    length: usize,
    pub numbers: bool,
    pub symbols: bool,
}

impl GeneratorConfig {
    pub fn new(length: usize, numbers: bool, symbols: bool) -> Self {
        Self {
            length: clamp_length(length),
            numbers,
            symbols,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Set the length, clamping into range. Returns true if the value changed.
    pub fn set_length(&mut self, length: usize) -> bool {
        let clamped = clamp_length(length);
        let changed = clamped != self.length;
        self.length = clamped;
        changed
    }

    /// Move the length by `delta` steps. Returns true if the value changed.
    pub fn step_length(&mut self, delta: isize) -> bool {
        let target = self.length.saturating_add_signed(delta);
        self.set_length(target)
    }

    pub fn toggle_numbers(&mut self) {
        self.numbers = !self.numbers;
    }

    pub fn toggle_symbols(&mut self) {
        self.symbols = !self.symbols;
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, false, false)
    }
}

/// Clamp a requested length into the slider range
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// How a random value is turned into an alphabet index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexPolicy {
    /// `floor(r * len)`: every character equally likely, output length exact.
    #[default]
    Uniform,

    /// `floor(r * len + 1)`: the historical off-by-one. Index 0 is never
    /// picked and an index of `len` contributes nothing, so output can be
    /// shorter than requested.
    Legacy,
}

impl std::fmt::Display for IndexPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexPolicy::Uniform => write!(f, "uniform"),
            IndexPolicy::Legacy => write!(f, "legacy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_length() {
        assert_eq!(GeneratorConfig::new(2, false, false).length(), MIN_LENGTH);
        assert_eq!(GeneratorConfig::new(500, false, false).length(), MAX_LENGTH);
        assert_eq!(GeneratorConfig::new(42, true, false).length(), 42);
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.length(), DEFAULT_LENGTH);
        assert!(!config.numbers);
        assert!(!config.symbols);
    }

    #[test]
    fn test_step_length_reports_change() {
        let mut config = GeneratorConfig::new(10, false, false);
        assert!(config.step_length(1));
        assert_eq!(config.length(), 11);
        assert!(config.step_length(-5));
        assert_eq!(config.length(), 6);
    }

    #[test]
    fn test_step_length_at_bounds_is_noop() {
        let mut config = GeneratorConfig::new(MIN_LENGTH, false, false);
        assert!(!config.step_length(-1));
        assert_eq!(config.length(), MIN_LENGTH);

        let mut config = GeneratorConfig::new(MAX_LENGTH, false, false);
        assert!(!config.step_length(10));
        assert_eq!(config.length(), MAX_LENGTH);
    }

    #[test]
    fn test_step_below_zero_saturates() {
        let mut config = GeneratorConfig::new(7, false, false);
        config.step_length(-1000);
        assert_eq!(config.length(), MIN_LENGTH);
    }

    #[test]
    fn test_toggles_flip_flags() {
        let mut config = GeneratorConfig::default();
        config.toggle_numbers();
        config.toggle_symbols();
        assert!(config.numbers && config.symbols);
        config.toggle_numbers();
        assert!(!config.numbers);
    }

    #[test]
    fn test_index_policy_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: IndexPolicy,
        }
        let w: Wrapper = toml::from_str(r#"policy = "legacy""#).unwrap();
        assert_eq!(w.policy, IndexPolicy::Legacy);
        assert_eq!(IndexPolicy::default(), IndexPolicy::Uniform);
        assert_eq!(IndexPolicy::Legacy.to_string(), "legacy");
    }
}
