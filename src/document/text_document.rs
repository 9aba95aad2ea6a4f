use tower_lsp::lsp_types::{Position, Range, TextDocumentContentChangeEvent, Url};

use crate::analysis::symbols::SymbolTable;
use crate::document::line_index::LineIndex;
use crate::parser::types::Span;

/// An open document and the symbol table built from its current text.
///
/// The table is owned by the record, so it is dropped together with the
/// document when the client closes it.
#[derive(Debug, Clone)]
pub struct TextDocument {
    uri: Url,
    version: i32,
    text: String,
    line_index: LineIndex,
    symbols: SymbolTable,
}

impl TextDocument {
    pub fn new(uri: Url, version: i32, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            uri,
            version,
            line_index: LineIndex::new(&text),
            text,
            symbols: SymbolTable::default(),
        }
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn offset_to_position(&self, offset: usize) -> Position {
        self.line_index.offset_to_position(&self.text, offset)
    }

    pub fn position_to_offset(&self, position: Position) -> usize {
        self.line_index.position_to_offset(&self.text, position)
    }

    pub fn span_to_range(&self, span: Span) -> Range {
        Range::new(
            self.offset_to_position(span.offset),
            self.offset_to_position(span.end()),
        )
    }

    /// Replaces the symbol table wholesale; tables are never merged.
    pub fn replace_symbols(&mut self, symbols: SymbolTable) {
        self.symbols = symbols;
    }

    /// Applies LSP content changes in order. Any change invalidates the
    /// current symbol table.
    pub fn apply_changes(&mut self, version: i32, changes: Vec<TextDocumentContentChangeEvent>) {
        for change in changes {
            match change.range {
                Some(range) => {
                    let start = self.position_to_offset(range.start);
                    let end = self.position_to_offset(range.end);
                    self.text
                        .replace_range(start.min(end)..start.max(end), &change.text);
                }
                None => self.text = change.text,
            }
            self.line_index = LineIndex::new(&self.text);
        }

        self.version = version;
        self.symbols = SymbolTable::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri() -> Url {
        Url::parse("file:///abs/path/main.jref").unwrap()
    }

    fn change(range: Option<Range>, text: &str) -> TextDocumentContentChangeEvent {
        TextDocumentContentChangeEvent {
            range,
            range_length: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn apply_changes_replaces_full_text() {
        let mut document = TextDocument::new(uri(), 1, "{}");

        document.apply_changes(2, vec![change(None, "[]")]);

        assert_eq!(document.text(), "[]");
        assert_eq!(document.version(), 2);
    }

    #[test]
    fn apply_changes_applies_incremental_edits_in_order() {
        let mut document = TextDocument::new(uri(), 1, "{\"a\": 1}");

        document.apply_changes(
            2,
            vec![
                change(
                    Some(Range::new(Position::new(0, 6), Position::new(0, 7))),
                    "\"x.jref\"",
                ),
                change(
                    Some(Range::new(Position::new(0, 2), Position::new(0, 3))),
                    "$ref",
                ),
            ],
        );

        assert_eq!(document.text(), "{\"$ref\": \"x.jref\"}");
    }

    #[test]
    fn apply_changes_rebuilds_line_index() {
        let mut document = TextDocument::new(uri(), 1, "{}");

        document.apply_changes(
            2,
            vec![change(
                Some(Range::new(Position::new(0, 1), Position::new(0, 1))),
                "\n",
            )],
        );

        assert_eq!(document.offset_to_position(2), Position::new(1, 0));
    }

    #[test]
    fn span_to_range_converts_both_ends() {
        let document = TextDocument::new(uri(), 1, "{\n  \"type\": \"string\"\n}");

        assert_eq!(
            document.span_to_range(Span::new(4, 16)),
            Range::new(Position::new(1, 2), Position::new(1, 18))
        );
    }
}
