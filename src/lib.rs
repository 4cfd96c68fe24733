//! passgen Library
//!
//! A terminal password generator: pick a length, toggle digits and symbols,
//! watch the strength meter and copy the result.

pub mod cli;
pub mod headless;

pub use cli::Args;
pub use headless::runner::run_headless;

use passgen_app::config::{init_config_file, load_settings, save_settings, Settings};
use passgen_core::prelude::*;

/// Application entry point
///
/// Installs error reporting and file logging, resolves settings (file, then
/// command-line flags) and runs either the TUI or headless mode.
pub async fn run(args: Args) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    passgen_core::logging::init()?;

    info!("passgen starting");

    let config_path = args.config_path();
    let mut settings = match &config_path {
        Some(path) => load_settings(path),
        None => Settings::default(),
    };
    args.apply(&mut settings);

    if args.write_config {
        let path =
            config_path.ok_or_else(|| Error::config("No config directory on this platform"))?;
        return write_config(&path, &args, &settings);
    }

    let result = if args.headless {
        run_headless(&settings).await
    } else {
        passgen_tui::run(&settings).await
    };

    match &result {
        Err(e) if e.is_recoverable() => warn!("Application stopped: {}", e),
        Err(e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }

    info!("passgen exiting");
    result
}

/// `--write-config`: the commented default file, or the resolved settings
/// when generator flags were given
fn write_config(path: &std::path::Path, args: &Args, settings: &Settings) -> Result<()> {
    if args.has_overrides() {
        save_settings(path, settings)?;
        println!("Wrote {}", path.display());
    } else if init_config_file(path)? {
        println!("Created {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}
