//! Configuration file parsing for passgen
//!
//! Settings live in `<config_dir>/passgen/config.toml` unless a path is
//! given on the command line.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_default_settings, load_settings, save_settings,
};
pub use types::*;
