use std::path::Path;

use tower_lsp::{LspService, Server};
use tracing::info;

use crate::log::init;
use crate::lsp::backend::Backend;

pub async fn run_server(log_path: &Path) -> anyhow::Result<()> {
    init(log_path)?;

    info!("Starting jref-lsp server");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;

    info!("jref-lsp server stopped");
    Ok(())
}
