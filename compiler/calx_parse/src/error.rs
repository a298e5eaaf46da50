//! Parse error types.

use std::fmt;

use calx_diagnostic::{Diagnostic, ErrorCode};
use calx_ir::Span;
use calx_lexer::TokenKind;

/// What went wrong while parsing a line.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorKind {
    /// Expected a specific token, found something else.
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
    },
    /// A position where an expression must start holds something else.
    ExpectedExpression { found: TokenKind },
    /// `(` without its `)`.
    UnclosedDelimiter { found: TokenKind, open: Span },
    ExpectedIdentifier { found: TokenKind },
    /// Parameter annotations only accept `Number` and `Boolean`.
    ExpectedType { found: TokenKind },
    /// A character no token starts with.
    InvalidCharacter,
    /// A complete command was followed by more tokens.
    TrailingInput { found: TokenKind },
}

/// A parse failure at a location in the line.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The offending token.
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    #[cold]
    pub fn unexpected(found: TokenKind, expected: &'static str, span: Span) -> Self {
        ParseError::new(ParseErrorKind::UnexpectedToken { found, expected }, span)
    }

    #[cold]
    pub fn expected_expression(found: TokenKind, span: Span) -> Self {
        ParseError::new(ParseErrorKind::ExpectedExpression { found }, span)
    }

    #[cold]
    pub fn unclosed(found: TokenKind, open: Span, span: Span) -> Self {
        ParseError::new(ParseErrorKind::UnclosedDelimiter { found, open }, span)
    }

    #[cold]
    pub fn expected_identifier(found: TokenKind, span: Span) -> Self {
        ParseError::new(ParseErrorKind::ExpectedIdentifier { found }, span)
    }

    #[cold]
    pub fn expected_type(found: TokenKind, span: Span) -> Self {
        ParseError::new(ParseErrorKind::ExpectedType { found }, span)
    }

    #[cold]
    pub fn invalid_character(span: Span) -> Self {
        ParseError::new(ParseErrorKind::InvalidCharacter, span)
    }

    #[cold]
    pub fn trailing_input(found: TokenKind, span: Span) -> Self {
        ParseError::new(ParseErrorKind::TrailingInput { found }, span)
    }

    /// Byte offset of the offending token in the line.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnclosedDelimiter { .. } => ErrorCode::E1003,
            ParseErrorKind::ExpectedIdentifier { .. } => ErrorCode::E1004,
            ParseErrorKind::ExpectedType { .. } => ErrorCode::E1005,
            ParseErrorKind::InvalidCharacter => ErrorCode::E1006,
            ParseErrorKind::TrailingInput { .. } => ErrorCode::E1008,
        }
    }

    /// Build a diagnostic pointing into `line`.
    pub fn to_diagnostic(&self, line: &str) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_source(line, self.span);
        match &self.kind {
            ParseErrorKind::UnclosedDelimiter { open, .. } => {
                diag.with_note(format!("the `(` at offset {} is never closed", open.offset()))
            }
            ParseErrorKind::ExpectedType { .. } => {
                diag.with_suggestion("parameter types are `Number` or `Boolean`")
            }
            _ => diag,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { found, expected } => {
                write!(f, "expected {expected}, found {found}")
            }
            ParseErrorKind::ExpectedExpression { found } => {
                write!(f, "expected expression, found {found}")
            }
            ParseErrorKind::UnclosedDelimiter { found, .. } => {
                write!(f, "unclosed `(`: expected `)`, found {found}")
            }
            ParseErrorKind::ExpectedIdentifier { found } => {
                write!(f, "expected identifier, found {found}")
            }
            ParseErrorKind::ExpectedType { found } => {
                write!(f, "expected type, found {found}")
            }
            ParseErrorKind::InvalidCharacter => write!(f, "invalid character"),
            ParseErrorKind::TrailingInput { found } => {
                write!(f, "unexpected {found} after complete command")
            }
        }
    }
}

impl std::error::Error for ParseError {}
