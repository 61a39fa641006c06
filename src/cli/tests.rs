//! Argument parsing and configuration building tests.

use super::validate::OutputFormat;
use super::{Cli, CliConfig, Commands};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_no_subcommand_defaults_to_validate() {
    let cli = Cli::try_parse_from(["arrdb"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.build_config(), CliConfig::default());
}

#[test]
fn test_validate_options() {
    let cli = Cli::try_parse_from(["arrdb", "validate", "--format", "json", "--strict"]).unwrap();
    let Some(Commands::Validate(cmd)) = cli.command else {
        panic!("expected validate command");
    };
    assert_eq!(cmd.format, OutputFormat::Json);
    assert!(cmd.strict);
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "arrdb",
        "validate",
        "--root",
        "/db",
        "--config",
        "/db/alt.toml",
        "--no-color",
    ])
    .unwrap();
    assert_eq!(cli.root, Some(PathBuf::from("/db")));
    assert_eq!(cli.config, Some(PathBuf::from("/db/alt.toml")));
    assert!(!cli.build_config().color);
}

#[test]
fn test_log_levels() {
    let verbose = Cli::try_parse_from(["arrdb", "-v"]).unwrap();
    assert_eq!(verbose.build_config().log_level, "debug");

    let quiet = Cli::try_parse_from(["arrdb", "--quiet"]).unwrap();
    assert_eq!(quiet.build_config().log_level, "error");
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    assert!(Cli::try_parse_from(["arrdb", "-v", "-q"]).is_err());
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["arrdb", "validate", "--format", "yaml"]).is_err());
}
