//! Settings parser for `<config_dir>/passgen/config.toml`

use std::path::{Path, PathBuf};

use super::types::Settings;
use passgen_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "passgen";

const DEFAULT_CONFIG: &str = r#"# passgen configuration

[generator]
length = 8                  # 6..=100, out-of-range values are clamped
numbers = false             # include 0-9
symbols = false             # include !@#$%^&*-_+=[]{}~`
index_policy = "uniform"    # "legacy" reproduces the old off-by-one indexing

[timing]
generation_delay_ms = 300   # delay before a new password appears
copied_flash_ms = 2000      # how long "Copied!" stays visible
"#;

/// Default location of the settings file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, falling back to defaults on any problem.
///
/// A missing file is normal; unreadable or unparsable files are logged and
/// ignored so a bad config never keeps the generator from starting.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                warn_on_out_of_range(path, &settings);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Load settings from the default location
pub fn load_default_settings() -> Settings {
    match default_config_path() {
        Some(path) => load_settings(&path),
        None => Settings::default(),
    }
}

fn warn_on_out_of_range(path: &Path, settings: &Settings) {
    let requested = settings.generator.length;
    let effective = passgen_core::clamp_length(requested);
    if requested != effective {
        warn!(
            "{:?}: generator.length = {} is out of range, using {}",
            path, requested, effective
        );
    }
}

/// Write `settings` to `path`, creating parent directories
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    std::fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
    info!("Saved settings to {:?}", path);
    Ok(())
}

/// Create a commented default config file. Returns false if one already exists.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG).context("Failed to write default config")?;
    info!("Created default config at {:?}", path);
    Ok(true)
}
