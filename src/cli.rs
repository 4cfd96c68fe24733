//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use passgen_app::config::{default_config_path, Settings};
use passgen_core::{IndexPolicy, MAX_LENGTH, MIN_LENGTH};

/// passgen - A terminal password generator with a live strength meter
#[derive(Parser, Debug, Default)]
#[command(name = "passgen")]
#[command(about = "A terminal password generator with a live strength meter", long_about = None)]
pub struct Args {
    /// Password length (6-100)
    #[arg(short, long, value_name = "N", value_parser = parse_length)]
    pub length: Option<usize>,

    /// Include digits 0-9
    #[arg(short, long)]
    pub numbers: bool,

    /// Include symbols !@#$%^&*-_+=[]{}~`
    #[arg(short, long)]
    pub symbols: bool,

    /// Use the legacy index policy (first character never chosen, may come up short)
    #[arg(long)]
    pub legacy_index: bool,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print one password as JSON events instead of starting the TUI
    #[arg(long)]
    pub headless: bool,

    /// Write the config file and exit
    #[arg(long)]
    pub write_config: bool,
}

fn parse_length(value: &str) -> std::result::Result<usize, String> {
    let length: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(format!("length must be between {MIN_LENGTH} and {MAX_LENGTH}"))
    }
}

impl Args {
    /// Config file to read (and write with `--write-config`)
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(default_config_path)
    }

    /// Whether any generator flag was given on the command line
    pub fn has_overrides(&self) -> bool {
        self.length.is_some() || self.numbers || self.symbols || self.legacy_index
    }

    /// Apply command-line flags on top of file settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(length) = self.length {
            settings.generator.length = length;
        }
        if self.numbers {
            settings.generator.numbers = true;
        }
        if self.symbols {
            settings.generator.symbols = true;
        }
        if self.legacy_index {
            settings.generator.index_policy = IndexPolicy::Legacy;
        }
    }
}
