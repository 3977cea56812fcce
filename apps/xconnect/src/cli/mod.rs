//! # xconnect CLI Module
//!
//! ## Available Commands
//!
//! - `emit` - Normalize one descriptor and deliver it to a target
//! - `graph` - Render a directory of descriptors as a DOT digraph

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use xconnect_core::XConnectError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// xconnect - service-topology descriptors
///
/// Reads declarative YAML descriptors of what a service listens on and
/// connects to, and derives a normalized configuration or a topology graph.
#[derive(Parser, Debug)]
#[command(name = "xconnect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize one descriptor to JSON or YAML
    Emit {
        /// YAML configuration file containing an xconnect section
        #[arg(short, long)]
        input: PathBuf,

        /// Input is a Kubernetes ConfigMap with an embedded descriptor
        #[arg(short, long)]
        k8s: bool,

        /// Output format (json, yaml)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Destination: file:// or http(s):// (stdout when omitted)
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Render the topology of a directory of descriptors as DOT
    Graph {
        /// Directory to walk for *.yaml / *.yml descriptors
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), XConnectError> {
    match cli.command {
        Commands::Emit {
            input,
            k8s,
            format,
            target,
        } => cmd_emit(&input, k8s, &format, target.as_deref()).await,
        Commands::Graph { root } => cmd_graph(&root),
    }
}
