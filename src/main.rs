use std::path::PathBuf;

use clap::Parser;

use jref_lsp::config;
use jref_lsp::lsp::server::run_server;

/// Language server for JSON documents with `$ref` cross-references
#[derive(Debug, Parser)]
#[command(name = "jref-lsp", version, about)]
struct Cli {
    /// Communicate over stdio (the only supported transport)
    #[arg(long)]
    #[allow(dead_code)]
    stdio: bool,

    /// Write logs to this file instead of the data directory
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_path = cli.log_file.unwrap_or_else(config::log_path);

    run_server(&log_path).await
}
