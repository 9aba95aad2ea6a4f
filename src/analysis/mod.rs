//! Analysis layer
//! - symbols.rs: Symbol table builder (JSON Pointer -> Symbol)
//! - reference.rs: `$ref` value -> target document and pointer
//! - definition.rs: Go-to-definition resolution
//! - diagnostics.rs: Syntax error -> diagnostic mapping

pub mod definition;
pub mod diagnostics;
pub mod reference;
pub mod symbols;

pub use definition::{on_definition_requested, resolve_definition};
pub use symbols::{Symbol, SymbolTable};

use tower_lsp::lsp_types::Diagnostic;
use tracing::warn;

use crate::document::TextDocument;
use crate::parser::{JsonParser, ParseOutput, Parser};

/// Everything derived from one version of a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub symbols: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Analyzer {
    parser: Box<dyn Parser>,
}

impl Analyzer {
    pub fn new(parser: Box<dyn Parser>) -> Self {
        Self { parser }
    }

    /// Parses the current text and derives a fresh symbol table plus
    /// diagnostics. A parser failure yields an empty analysis.
    pub fn on_content_changed(&self, document: &TextDocument) -> Analysis {
        let output = self
            .parser
            .parse(document.text())
            .inspect_err(|e| warn!("Failed to parse {}: {}", document.uri(), e))
            .unwrap_or_default();

        Self::analyze(document, output)
    }

    fn analyze(document: &TextDocument, output: ParseOutput) -> Analysis {
        Analysis {
            symbols: symbols::build(output.root.as_ref()),
            diagnostics: diagnostics::to_diagnostics(document, &output.errors),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Box::new(JsonParser::new()))
    }
}
