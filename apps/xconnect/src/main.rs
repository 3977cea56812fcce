//! Entry point for the xconnect command-line tool.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xconnect::cli;

#[tokio::main]
async fn main() {
    // XCONNECT_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("XCONNECT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "xconnect=info,xconnect_core=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
