//! Command-line parsing and settings resolution

use clap::Parser;
use passgen::Args;
use passgen_app::config::{load_settings, Settings};
use passgen_core::IndexPolicy;
use tempfile::tempdir;

#[test]
fn test_no_arguments() {
    let args = Args::try_parse_from(["passgen"]).unwrap();

    assert_eq!(args.length, None);
    assert!(!args.numbers);
    assert!(!args.symbols);
    assert!(!args.headless);
    assert!(!args.has_overrides());
}

#[test]
fn test_all_generator_flags() {
    let args = Args::try_parse_from([
        "passgen",
        "--length",
        "32",
        "--numbers",
        "--symbols",
        "--legacy-index",
        "--headless",
    ])
    .unwrap();

    assert_eq!(args.length, Some(32));
    assert!(args.numbers);
    assert!(args.symbols);
    assert!(args.legacy_index);
    assert!(args.headless);
}

#[test]
fn test_short_flags() {
    let args = Args::try_parse_from(["passgen", "-l", "12", "-n", "-s"]).unwrap();

    assert_eq!(args.length, Some(12));
    assert!(args.numbers);
    assert!(args.symbols);
}

#[test]
fn test_length_out_of_range_is_rejected() {
    assert!(Args::try_parse_from(["passgen", "--length", "5"]).is_err());
    assert!(Args::try_parse_from(["passgen", "--length", "101"]).is_err());
    assert!(Args::try_parse_from(["passgen", "--length", "many"]).is_err());
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[generator]\nlength = 40\nnumbers = true\n\n[timing]\ngeneration_delay_ms = 10\n",
    )
    .unwrap();

    let args = Args::try_parse_from([
        "passgen",
        "--config",
        path.to_str().unwrap(),
        "--symbols",
        "--legacy-index",
    ])
    .unwrap();

    let mut settings = load_settings(&args.config_path().unwrap());
    args.apply(&mut settings);

    assert_eq!(settings.generator.length, 40);
    assert!(settings.generator.numbers);
    assert!(settings.generator.symbols);
    assert_eq!(settings.generator.index_policy, IndexPolicy::Legacy);
    assert_eq!(settings.timing.generation_delay_ms, 10);
    assert_eq!(settings.timing.copied_flash_ms, 2000);
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let args = Args::try_parse_from([
        "passgen",
        "--config",
        dir.path().join("absent.toml").to_str().unwrap(),
    ])
    .unwrap();

    let settings = load_settings(&args.config_path().unwrap());
    assert_eq!(settings, Settings::default());
}
