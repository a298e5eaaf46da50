//! Token cursor for navigating the token stream.

use calx_ir::Span;
use calx_lexer::{Token, TokenKind};

use crate::ParseError;

/// Cursor over the tokens of one line.
///
/// The token list always ends with `Eof` and the cursor never moves past
/// it, so `current` is always valid.
pub struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)),
            "token list must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Look `n` tokens ahead; clamps to `Eof`.
    pub fn peek_kind(&self, n: usize) -> &TokenKind {
        let index = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[index].kind
    }

    /// Check if the current token matches `kind` (ignoring payloads).
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    pub fn is_at_end(&self) -> bool {
        self.check(&TokenKind::Eof)
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail naming what was `expected`.
    pub fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let token = self.current();
            Err(self.error_here(ParseError::unexpected(token.kind.clone(), expected, token.span)))
        }
    }

    /// Replace `fallback` with an invalid-character error when the cursor
    /// sits on a lexer error token.
    pub fn error_here(&self, fallback: ParseError) -> ParseError {
        if self.check(&TokenKind::Error) {
            ParseError::invalid_character(self.current_span())
        } else {
            fallback
        }
    }
}
