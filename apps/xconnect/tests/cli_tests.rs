//! CLI argument-surface tests.

use clap::Parser;
use xconnect::cli::{Cli, Commands};

#[test]
fn emit_parses_all_flags() {
    let cli = Cli::try_parse_from([
        "xconnect",
        "emit",
        "--input",
        "service.yaml",
        "--k8s",
        "--format",
        "yaml",
        "--target",
        "file:///tmp/out.yaml",
    ])
    .expect("parse");

    match cli.command {
        Commands::Emit {
            input,
            k8s,
            format,
            target,
        } => {
            assert_eq!(input.to_string_lossy(), "service.yaml");
            assert!(k8s);
            assert_eq!(format, "yaml");
            assert_eq!(target.as_deref(), Some("file:///tmp/out.yaml"));
        }
        Commands::Graph { .. } => unreachable!("expected emit"),
    }
}

#[test]
fn emit_defaults_to_json_and_stdout() {
    let cli = Cli::try_parse_from(["xconnect", "emit", "--input", "service.yaml"]).expect("parse");
    match cli.command {
        Commands::Emit {
            k8s,
            format,
            target,
            ..
        } => {
            assert!(!k8s);
            assert_eq!(format, "json");
            assert!(target.is_none());
        }
        Commands::Graph { .. } => unreachable!("expected emit"),
    }
}

#[test]
fn graph_defaults_to_current_directory() {
    let cli = Cli::try_parse_from(["xconnect", "graph"]).expect("parse");
    match cli.command {
        Commands::Graph { root } => assert_eq!(root.to_string_lossy(), "."),
        Commands::Emit { .. } => unreachable!("expected graph"),
    }
}

#[test]
fn a_subcommand_is_required() {
    assert!(Cli::try_parse_from(["xconnect"]).is_err());
    assert!(Cli::try_parse_from(["xconnect", "emit"]).is_err());
}
