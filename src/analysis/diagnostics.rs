//! Syntax error -> LSP diagnostic mapping

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Range};

use crate::config::DIAGNOSTIC_SOURCE;
use crate::document::TextDocument;
use crate::parser::syntax_error::{ParseErrorCode, SyntaxError};

pub fn message(code: ParseErrorCode) -> &'static str {
    match code {
        ParseErrorCode::InvalidSymbol => "Invalid symbol found",
        ParseErrorCode::InvalidNumberFormat => "Invalid number format",
        ParseErrorCode::PropertyNameExpected => "Property name expected",
        ParseErrorCode::ValueExpected => "Value expected",
        ParseErrorCode::ColonExpected => "Colon expected",
        ParseErrorCode::CommaExpected => "Comma expected",
        ParseErrorCode::CloseBraceExpected => "Closing brace \"}\" expected",
        ParseErrorCode::CloseBracketExpected => "Closing bracket \"]\" expected",
        ParseErrorCode::EndOfFileExpected => "End of file expected",
        ParseErrorCode::InvalidCommentToken => "Invalid comment token",
        ParseErrorCode::UnexpectedEndOfComment => "Unexpected end of comment",
        ParseErrorCode::UnexpectedEndOfString => "Unexpected end of string",
        ParseErrorCode::UnexpectedEndOfNumber => "Unexpected end of number",
        ParseErrorCode::InvalidUnicode => "Invalid unicode sequence",
        ParseErrorCode::InvalidEscapeCharacter => "Invalid escape character",
        ParseErrorCode::InvalidCharacter => "Invalid character found",
        ParseErrorCode::Unknown(_) => "Unknown syntax error",
    }
}

pub fn to_diagnostic(document: &TextDocument, error: &SyntaxError) -> Diagnostic {
    let range = Range::new(
        document.offset_to_position(error.offset),
        document.offset_to_position(error.offset + error.length),
    );

    Diagnostic {
        range,
        severity: Some(DiagnosticSeverity::ERROR),
        code: Some(NumberOrString::Number(error.code.code() as i32)),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: message(error.code).to_string(),
        ..Default::default()
    }
}

/// One diagnostic per syntax error, in the order reported.
pub fn to_diagnostics(document: &TextDocument, errors: &[SyntaxError]) -> Vec<Diagnostic> {
    errors
        .iter()
        .map(|error| to_diagnostic(document, error))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tower_lsp::lsp_types::{Position, Url};

    fn document(text: &str) -> TextDocument {
        TextDocument::new(Url::parse("file:///test.jref").unwrap(), 1, text)
    }

    #[test]
    fn to_diagnostic_positions_error_at_end_of_text() {
        let text = "{\n  \"key\": \"value\"";
        let error = SyntaxError::new(ParseErrorCode::CloseBraceExpected, text.len(), 0);

        let diagnostic = to_diagnostic(&document(text), &error);

        assert_eq!(diagnostic.message, "Closing brace \"}\" expected");
        assert_eq!(diagnostic.severity, Some(DiagnosticSeverity::ERROR));
        assert_eq!(diagnostic.source.as_deref(), Some("jref-language-server"));
        assert_eq!(
            diagnostic.range,
            Range::new(Position::new(1, 16), Position::new(1, 16))
        );
    }

    #[test]
    fn to_diagnostic_spans_error_length() {
        let error = SyntaxError::new(ParseErrorCode::InvalidSymbol, 6, 3);

        let diagnostic = to_diagnostic(&document("{\"a\": tru}"), &error);

        assert_eq!(
            diagnostic.range,
            Range::new(Position::new(0, 6), Position::new(0, 9))
        );
        assert_eq!(diagnostic.code, Some(NumberOrString::Number(1)));
    }

    #[test]
    fn to_diagnostic_handles_unknown_codes() {
        let error = SyntaxError::new(ParseErrorCode::from_code(999), 0, 1);

        let diagnostic = to_diagnostic(&document("{}"), &error);

        assert_eq!(diagnostic.message, "Unknown syntax error");
        assert_eq!(diagnostic.code, Some(NumberOrString::Number(999)));
    }

    #[test]
    fn to_diagnostics_preserves_order_without_dedup() {
        let errors = vec![
            SyntaxError::new(ParseErrorCode::CommaExpected, 5, 0),
            SyntaxError::new(ParseErrorCode::CommaExpected, 5, 0),
            SyntaxError::new(ParseErrorCode::ColonExpected, 1, 0),
        ];

        let diagnostics = to_diagnostics(&document("{\"a\" 1 2}"), &errors);

        let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["Comma expected", "Comma expected", "Colon expected"]);
    }

    #[test]
    fn to_diagnostics_returns_empty_for_no_errors() {
        assert!(to_diagnostics(&document("{}"), &[]).is_empty());
    }

    #[rstest]
    #[case(1, "Invalid symbol found")]
    #[case(2, "Invalid number format")]
    #[case(3, "Property name expected")]
    #[case(4, "Value expected")]
    #[case(5, "Colon expected")]
    #[case(6, "Comma expected")]
    #[case(7, "Closing brace \"}\" expected")]
    #[case(8, "Closing bracket \"]\" expected")]
    #[case(9, "End of file expected")]
    #[case(10, "Invalid comment token")]
    #[case(11, "Unexpected end of comment")]
    #[case(12, "Unexpected end of string")]
    #[case(13, "Unexpected end of number")]
    #[case(14, "Invalid unicode sequence")]
    #[case(15, "Invalid escape character")]
    #[case(16, "Invalid character found")]
    #[case(0, "Unknown syntax error")]
    #[case(17, "Unknown syntax error")]
    fn message_maps_every_code(#[case] code: u32, #[case] expected: &str) {
        assert_eq!(message(ParseErrorCode::from_code(code)), expected);
    }
}
