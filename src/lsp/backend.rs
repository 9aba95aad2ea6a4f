use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, info};

use crate::analysis::{Analyzer, on_definition_requested};
use crate::config::SERVER_NAME;
use crate::document::DocumentRegistry;

pub struct Backend {
    client: Client,
    documents: Arc<RwLock<DocumentRegistry>>,
    analyzer: Analyzer,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self::build(client, Analyzer::default())
    }

    pub fn build(client: Client, analyzer: Analyzer) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(DocumentRegistry::new())),
            analyzer,
        }
    }

    pub fn server_capabilities() -> ServerCapabilities {
        ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Options(
                TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::INCREMENTAL),
                    ..Default::default()
                },
            )),
            definition_provider: Some(OneOf::Left(true)),
            ..Default::default()
        }
    }

    /// Rebuilds the symbol table of `uri` and publishes its diagnostics.
    async fn analyze_and_publish(&self, uri: Url) {
        let (diagnostics, version) = {
            let mut documents = self.documents.write().await;
            let Some(document) = documents.get(&uri) else {
                return;
            };

            let analysis = self.analyzer.on_content_changed(document);
            let version = document.version();
            documents.replace_symbols(&uri, analysis.symbols);
            (analysis.diagnostics, version)
        };

        self.client
            .log_message(
                MessageType::LOG,
                format!("Publishing {} diagnostics for {}", diagnostics.len(), uri),
            )
            .await;

        self.client
            .publish_diagnostics(uri, diagnostics, Some(version))
            .await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _params: InitializeParams) -> Result<InitializeResult> {
        self.client
            .log_message(MessageType::INFO, "LSP server initializing")
            .await;
        Ok(InitializeResult {
            capabilities: Self::server_capabilities(),
            server_info: Some(ServerInfo {
                name: SERVER_NAME.to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.client
            .log_message(MessageType::INFO, "LSP server shutting down")
            .await;
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        info!("Document opened: {}", document.uri);

        self.documents
            .write()
            .await
            .open(document.uri.clone(), document.version, document.text);

        self.analyze_and_publish(document.uri).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        let tracked = self
            .documents
            .write()
            .await
            .apply_changes(&uri, version, params.content_changes)
            .is_some();

        if !tracked {
            debug!("Ignoring change to untracked document {}", uri);
            return;
        }

        self.analyze_and_publish(uri).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        info!("Document closed: {}", uri);

        self.documents.write().await.close(&uri);

        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let documents = self.documents.read().await;
        let link = on_definition_requested(&documents, &uri, position);

        Ok(link.map(|link| GotoDefinitionResponse::Link(vec![link])))
    }
}
