//! Configuration types for passgen
//!
//! Defines:
//! - `Settings` - Global application settings (config.toml)
//! - `GeneratorSettings` - Initial constraints and index policy
//! - `TimingSettings` - Generation delay and copy acknowledgement window

use std::time::Duration;

use passgen_core::{GeneratorConfig, IndexPolicy, DEFAULT_LENGTH};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub generator: GeneratorSettings,

    #[serde(default)]
    pub timing: TimingSettings,
}

impl Settings {
    /// Generation constraints the app starts with
    pub fn initial_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(
            self.generator.length,
            self.generator.numbers,
            self.generator.symbols,
        )
    }
}

/// Generator defaults
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratorSettings {
    /// Initial password length (clamped into 6..=100)
    #[serde(default = "default_length")]
    pub length: usize,

    /// Include digits on startup
    #[serde(default)]
    pub numbers: bool,

    /// Include symbols on startup
    #[serde(default)]
    pub symbols: bool,

    /// How random values map onto the alphabet
    #[serde(default)]
    pub index_policy: IndexPolicy,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            length: default_length(),
            numbers: false,
            symbols: false,
            index_policy: IndexPolicy::default(),
        }
    }
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

/// Deferred work timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingSettings {
    /// Artificial delay before a generation completes
    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,

    /// How long the "Copied!" acknowledgement stays visible
    #[serde(default = "default_copied_flash_ms")]
    pub copied_flash_ms: u64,
}

impl TimingSettings {
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn copied_flash(&self) -> Duration {
        Duration::from_millis(self.copied_flash_ms)
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            generation_delay_ms: default_generation_delay_ms(),
            copied_flash_ms: default_copied_flash_ms(),
        }
    }
}

fn default_generation_delay_ms() -> u64 {
    300
}

fn default_copied_flash_ms() -> u64 {
    2000
}
