//! Parser trait definition

use thiserror::Error;

use crate::parser::syntax_error::SyntaxError;
use crate::parser::types::Node;

/// Hard failure of the parser itself, as opposed to a syntax error in the input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),

    #[error("Parse failed: {0}")]
    ParseFailed(String),
}

/// Result of parsing one version of a document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParseOutput {
    /// Root value, absent when the text holds no value at all
    pub root: Option<Node>,
    /// Syntax errors in source order
    pub errors: Vec<SyntaxError>,
}

/// Turns document text into a node tree plus syntax errors.
#[cfg_attr(test, mockall::automock)]
pub trait Parser: Send + Sync {
    fn parse(&self, content: &str) -> Result<ParseOutput, ParseError>;
}
