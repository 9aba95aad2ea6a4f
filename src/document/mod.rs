//! Document layer
//! - line_index.rs: Byte offset <-> LSP position conversion
//! - text_document.rs: One open document with its symbol table
//! - registry.rs: Set of open documents keyed by URI

pub mod line_index;
pub mod registry;
pub mod text_document;

pub use line_index::LineIndex;
pub use registry::DocumentRegistry;
pub use text_document::TextDocument;
