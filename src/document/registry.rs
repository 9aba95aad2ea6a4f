use std::collections::HashMap;

use tower_lsp::lsp_types::{TextDocumentContentChangeEvent, Url};
use tracing::debug;

use crate::analysis::symbols::SymbolTable;
use crate::document::text_document::TextDocument;

/// The set of documents currently open in the client, keyed by URI.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    documents: HashMap<Url, TextDocument>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, uri: Url, version: i32, text: impl Into<String>) -> &TextDocument {
        debug!("Tracking document {}", uri);
        self.documents
            .entry(uri.clone())
            .insert_entry(TextDocument::new(uri, version, text))
            .into_mut()
    }

    /// Returns `None` when the document is not tracked.
    pub fn apply_changes(
        &mut self,
        uri: &Url,
        version: i32,
        changes: Vec<TextDocumentContentChangeEvent>,
    ) -> Option<&TextDocument> {
        let document = self.documents.get_mut(uri)?;
        document.apply_changes(version, changes);
        Some(document)
    }

    pub fn close(&mut self, uri: &Url) -> Option<TextDocument> {
        debug!("Dropping document {}", uri);
        self.documents.remove(uri)
    }

    pub fn get(&self, uri: &Url) -> Option<&TextDocument> {
        self.documents.get(uri)
    }

    pub fn contains(&self, uri: &Url) -> bool {
        self.documents.contains_key(uri)
    }

    /// Returns false when the document is not tracked.
    pub fn replace_symbols(&mut self, uri: &Url, symbols: SymbolTable) -> bool {
        match self.documents.get_mut(uri) {
            Some(document) => {
                document.replace_symbols(symbols);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
