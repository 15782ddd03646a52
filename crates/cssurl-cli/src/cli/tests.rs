//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use cssurl_core::ProcessorConfig;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_escape() {
    let cli = parse(&["cssurl", "escape", "site.css"]);
    match cli.command {
        CliCommand::Escape { input } => assert_eq!(input, "site.css"),
        _ => panic!("expected Escape"),
    }
    assert!(!cli.options.waypoints);
    assert!(cli.options.config.is_none());
}

#[test]
fn cli_parse_roundtrip_stdin() {
    match parse(&["cssurl", "roundtrip", "-"]).command {
        CliCommand::Roundtrip { input } => assert_eq!(input, "-"),
        _ => panic!("expected Roundtrip"),
    }
}

#[test]
fn cli_parse_scan_json() {
    match parse(&["cssurl", "scan", "a.css", "--json"]).command {
        CliCommand::Scan { input, json } => {
            assert_eq!(input, "a.css");
            assert!(json);
        }
        _ => panic!("expected Scan"),
    }
}

#[test]
fn cli_parse_global_flags_after_subcommand() {
    let cli = parse(&[
        "cssurl",
        "escape",
        "a.css",
        "--waypoints",
        "--remove-trailing-space",
        "--namespace",
        "PASS_B",
        "--config",
        "/tmp/cssurl.toml",
    ]);
    assert!(cli.options.waypoints);
    assert!(cli.options.remove_trailing_space);
    assert_eq!(cli.options.namespace.as_deref(), Some("PASS_B"));
    assert_eq!(
        cli.options.config.as_deref(),
        Some(std::path::Path::new("/tmp/cssurl.toml"))
    );
}

#[test]
fn cli_flags_override_config() {
    let cli = parse(&["cssurl", "--waypoints", "--namespace", "X", "scan", "a.css"]);
    let base = ProcessorConfig {
        save_waypoints: false,
        remove_trailing_space: true,
        namespace: Some("FILE".to_string()),
    };
    let cfg = cli.options.apply(base);
    assert!(cfg.save_waypoints);
    assert!(cfg.remove_trailing_space);
    assert_eq!(cfg.namespace.as_deref(), Some("X"));
}

#[test]
fn cli_parse_missing_input_fails() {
    assert!(Cli::try_parse_from(["cssurl", "escape"]).is_err());
}
