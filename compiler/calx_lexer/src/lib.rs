//! Lexer for calx using logos.
//!
//! Turns one input line into a flat list of [`Token`]s terminated by
//! [`TokenKind::Eof`]. Unrecognised characters become [`TokenKind::Error`]
//! tokens instead of aborting, so the parser can report them with their
//! position.

mod raw_token;

use std::fmt;

use calx_ir::{Name, Span};
use logos::Logos;

use raw_token::RawToken;

/// Token kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Keywords
    Let,
    Explain,
    Symbols,
    Exit,
    Quit,
    True,
    False,
    NumberType,
    BooleanType,

    // Punctuation and operators
    Hash,
    LParen,
    RParen,
    Comma,
    Colon,
    Arrow,
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,

    // Literals and names
    Number(f64),
    Ident(Name),

    /// A character sequence no rule matches.
    Error,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Human-readable description used in parse error messages.
    pub fn display_name(&self) -> String {
        match self {
            TokenKind::Number(value) => format!("number `{}`", calx_ir::format_number(*value)),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Error => "invalid character".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("`{}`", other.symbol()),
        }
    }

    /// Source text of fixed tokens.
    fn symbol(&self) -> &'static str {
        match self {
            TokenKind::Let => "let",
            TokenKind::Explain => "explain",
            TokenKind::Symbols => "symbols",
            TokenKind::Exit => "exit",
            TokenKind::Quit => "quit",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::NumberType => "Number",
            TokenKind::BooleanType => "Boolean",
            TokenKind::Hash => "#",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Arrow => "->",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Number(_) | TokenKind::Ident(_) | TokenKind::Error | TokenKind::Eof => "",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// A token with its location in the line.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lex a line into tokens, always ending with `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut result = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match token_result {
            Ok(raw) => convert_token(raw, logos.slice()),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span));
    }

    let eof = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, eof));
    result
}

fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Let => TokenKind::Let,
        RawToken::Explain => TokenKind::Explain,
        RawToken::Symbols => TokenKind::Symbols,
        RawToken::Exit => TokenKind::Exit,
        RawToken::Quit => TokenKind::Quit,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::NumberType => TokenKind::NumberType,
        RawToken::BooleanType => TokenKind::BooleanType,
        RawToken::Hash => TokenKind::Hash,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Number(value) => TokenKind::Number(value),
        RawToken::Ident => TokenKind::Ident(Name::new(slice)),
    }
}

#[cfg(test)]
mod tests;
