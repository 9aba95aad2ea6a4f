//! Syntax errors reported by the parser

/// Syntax error codes. The set may grow with the parser, so anything outside
/// it is carried as `Unknown` instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorCode {
    InvalidSymbol,
    InvalidNumberFormat,
    PropertyNameExpected,
    ValueExpected,
    ColonExpected,
    CommaExpected,
    CloseBraceExpected,
    CloseBracketExpected,
    EndOfFileExpected,
    InvalidCommentToken,
    UnexpectedEndOfComment,
    UnexpectedEndOfString,
    UnexpectedEndOfNumber,
    InvalidUnicode,
    InvalidEscapeCharacter,
    InvalidCharacter,
    Unknown(u32),
}

impl ParseErrorCode {
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::InvalidSymbol,
            2 => Self::InvalidNumberFormat,
            3 => Self::PropertyNameExpected,
            4 => Self::ValueExpected,
            5 => Self::ColonExpected,
            6 => Self::CommaExpected,
            7 => Self::CloseBraceExpected,
            8 => Self::CloseBracketExpected,
            9 => Self::EndOfFileExpected,
            10 => Self::InvalidCommentToken,
            11 => Self::UnexpectedEndOfComment,
            12 => Self::UnexpectedEndOfString,
            13 => Self::UnexpectedEndOfNumber,
            14 => Self::InvalidUnicode,
            15 => Self::InvalidEscapeCharacter,
            16 => Self::InvalidCharacter,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidSymbol => 1,
            Self::InvalidNumberFormat => 2,
            Self::PropertyNameExpected => 3,
            Self::ValueExpected => 4,
            Self::ColonExpected => 5,
            Self::CommaExpected => 6,
            Self::CloseBraceExpected => 7,
            Self::CloseBracketExpected => 8,
            Self::EndOfFileExpected => 9,
            Self::InvalidCommentToken => 10,
            Self::UnexpectedEndOfComment => 11,
            Self::UnexpectedEndOfString => 12,
            Self::UnexpectedEndOfNumber => 13,
            Self::InvalidUnicode => 14,
            Self::InvalidEscapeCharacter => 15,
            Self::InvalidCharacter => 16,
            Self::Unknown(code) => *code,
        }
    }
}

/// A syntax error located by byte offset and length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxError {
    pub code: ParseErrorCode,
    pub offset: usize,
    pub length: usize,
}

impl SyntaxError {
    pub fn new(code: ParseErrorCode, offset: usize, length: usize) -> Self {
        Self {
            code,
            offset,
            length,
        }
    }
}
