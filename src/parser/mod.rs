//! Parser layer
//! - traits.rs: Parser trait definition and parse output
//! - types.rs: Owned node tree (Node, NodeKind, Span)
//! - syntax_error.rs: Syntax error codes reported alongside the tree
//! - json.rs: tree-sitter backed JSON parser

pub mod json;
pub mod syntax_error;
pub mod traits;
pub mod types;

pub use json::JsonParser;
pub use syntax_error::{ParseErrorCode, SyntaxError};
pub use traits::{ParseError, ParseOutput, Parser};
pub use types::{Node, NodeKind, Span};
