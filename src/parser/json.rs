//! JSON parser backed by tree-sitter-json
//!
//! Converts the concrete tree into the owned [`Node`] model. `ERROR` and
//! `MISSING` nodes never become nodes; they are reported as syntax errors
//! instead, so a pair with a broken key or value ends up with fewer than two
//! children. Complete values that tree-sitter wrapped in an `ERROR` inside a
//! container are still kept, so array indices follow the source.

use crate::parser::syntax_error::{ParseErrorCode, SyntaxError};
use crate::parser::traits::{ParseError, ParseOutput, Parser};
use crate::parser::types::{Node, NodeKind};
use tracing::warn;

const VALUE_KINDS: [&str; 7] = ["object", "array", "string", "number", "true", "false", "null"];

/// Parser for JSON documents with `$ref` properties
pub struct JsonParser;

impl JsonParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for JsonParser {
    fn parse(&self, content: &str) -> Result<ParseOutput, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_json::LANGUAGE;
        parser.set_language(&language.into()).map_err(|e| {
            warn!("Failed to set JSON language for tree-sitter: {}", e);
            ParseError::TreeSitter(e.to_string())
        })?;

        let tree = parser.parse(content, None).ok_or_else(|| {
            warn!("Failed to parse JSON content");
            ParseError::ParseFailed("Failed to parse JSON".to_string())
        })?;

        let mut builder = TreeBuilder {
            content,
            errors: Vec::new(),
        };
        let root = builder.document(tree.root_node());

        Ok(ParseOutput {
            root,
            errors: builder.errors,
        })
    }
}

struct TreeBuilder<'a> {
    content: &'a str,
    errors: Vec<SyntaxError>,
}

impl<'a> TreeBuilder<'a> {
    /// The first value is the root; anything after it is an error
    fn document(&mut self, document: tree_sitter::Node) -> Option<Node> {
        if document.kind() != "document" {
            return self.convert(document, false);
        }

        let mut root = None;
        let mut cursor = document.walk();

        // top-level ERROR nodes are extras too
        for child in document.children(&mut cursor) {
            if child.kind() == "comment" {
                continue;
            }
            if root.is_some() {
                self.report(ParseErrorCode::EndOfFileExpected, child);
                continue;
            }
            root = self.convert(child, false);
        }

        root
    }

    fn convert(&mut self, node: tree_sitter::Node, in_object: bool) -> Option<Node> {
        if node.is_error() {
            self.report_error(node, in_object);
            return None;
        }

        if node.is_missing() {
            self.report(missing_token_code(node.kind()), node);
            return None;
        }

        let kind = match node.kind() {
            "object" => NodeKind::Object(self.children(node, true)),
            "array" => NodeKind::Array(self.children(node, false)),
            "pair" => NodeKind::Property(self.children(node, false)),
            "string" => NodeKind::String(self.string_value(node)),
            "number" => NodeKind::Number(self.text(node).to_string()),
            "true" => NodeKind::Boolean(true),
            "false" => NodeKind::Boolean(false),
            "null" => NodeKind::Null,
            // punctuation and comments
            _ => return None,
        };

        let start = node.start_byte();
        Some(Node::new(kind, start, node.end_byte() - start))
    }

    fn children(&mut self, node: tree_sitter::Node, in_object: bool) -> Vec<Node> {
        let mut cursor = node.walk();
        let mut children = Vec::new();

        for child in node.children(&mut cursor) {
            if child.is_error() && node.kind() != "pair" {
                self.report_error(child, in_object);
                children.extend(self.recover(child, in_object));
                continue;
            }
            if let Some(converted) = self.convert(child, in_object) {
                children.push(converted);
            }
        }

        children
    }

    /// Converts the complete elements (or properties) an `ERROR` node swallowed
    fn recover(&mut self, error: tree_sitter::Node, in_object: bool) -> Vec<Node> {
        let mut cursor = error.walk();
        let wrapped: Vec<tree_sitter::Node> = error
            .named_children(&mut cursor)
            .filter(|child| is_element(*child, in_object))
            .collect();

        wrapped
            .into_iter()
            .filter_map(|child| self.convert(child, in_object))
            .collect()
    }

    fn report_error(&mut self, node: tree_sitter::Node, in_object: bool) {
        let text = self.text(node);

        if let Some(code) = unclosed_code(text) {
            self.errors.push(SyntaxError::new(code, node.end_byte(), 0));
            return;
        }

        let mut cursor = node.walk();
        let wraps_element = node
            .named_children(&mut cursor)
            .any(|child| is_element(child, in_object));
        let code = if wraps_element {
            ParseErrorCode::CommaExpected
        } else {
            classify_error(text, in_object)
        };
        self.report(code, node);
    }

    /// Decoded string value; undecodable literals fall back to the raw text
    fn string_value(&mut self, node: tree_sitter::Node) -> String {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.is_missing() || child.is_error() {
                self.convert(child, false);
            }
        }

        let text = self.text(node);
        serde_json::from_str::<String>(text).unwrap_or_else(|_| {
            text.trim()
                .trim_start_matches('"')
                .trim_end_matches('"')
                .to_string()
        })
    }

    fn text(&self, node: tree_sitter::Node) -> &'a str {
        let content: &'a str = self.content;
        &content[node.byte_range()]
    }

    fn report(&mut self, code: ParseErrorCode, node: tree_sitter::Node) {
        let start = node.start_byte();
        self.errors
            .push(SyntaxError::new(code, start, node.end_byte() - start));
    }
}

/// A child that can stand on its own inside an array (value) or object (pair)
fn is_element(node: tree_sitter::Node, in_object: bool) -> bool {
    if node.is_error() || node.is_missing() || node.has_error() {
        return false;
    }
    if in_object {
        node.kind() == "pair"
    } else {
        VALUE_KINDS.contains(&node.kind())
    }
}

fn missing_token_code(kind: &str) -> ParseErrorCode {
    match kind {
        "}" => ParseErrorCode::CloseBraceExpected,
        "]" => ParseErrorCode::CloseBracketExpected,
        ":" => ParseErrorCode::ColonExpected,
        "," => ParseErrorCode::CommaExpected,
        "\"" => ParseErrorCode::UnexpectedEndOfString,
        _ => ParseErrorCode::ValueExpected,
    }
}

/// The closing token for the innermost `{` or `[` left open in `text`
fn unclosed_code(text: &str) -> Option<ParseErrorCode> {
    let mut open = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' | '[' => open.push(c),
            '}' | ']' => {
                open.pop();
            }
            _ => {}
        }
    }

    open.last().map(|c| match c {
        '{' => ParseErrorCode::CloseBraceExpected,
        _ => ParseErrorCode::CloseBracketExpected,
    })
}

/// Picks an error code for the text an `ERROR` node swallowed
fn classify_error(text: &str, in_object: bool) -> ParseErrorCode {
    let text = text.trim_start();
    let Some(first) = text.chars().next() else {
        return ParseErrorCode::ValueExpected;
    };

    match first {
        '"' => ParseErrorCode::UnexpectedEndOfString,
        '0'..='9' | '-' => ParseErrorCode::InvalidNumberFormat,
        '/' => ParseErrorCode::InvalidCommentToken,
        '{' | '}' | '[' | ']' | ':' | ',' if in_object => ParseErrorCode::PropertyNameExpected,
        '{' | '}' | '[' | ']' | ':' | ',' => ParseErrorCode::ValueExpected,
        c if c.is_control() => ParseErrorCode::InvalidCharacter,
        _ => ParseErrorCode::InvalidSymbol,
    }
}
