//! Recursive descent parser for calx.
//!
//! One input line parses into one [`Command`]. Parsing never consults the
//! symbol table: whether a name is bound is the type checker's business.
//!
//! # Module Structure
//!
//! - `cursor`: token navigation
//! - `error`: [`ParseError`] and its kinds
//! - `grammar`: commands, expressions, function literals and types

mod cursor;
mod error;
mod grammar;

pub use error::{ParseError, ParseErrorKind};

use calx_ir::Command;
use cursor::Cursor;

/// Parser over the tokens of a single line.
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    /// Lex `line` and position the parser at its first token.
    pub fn new(line: &str) -> Self {
        Parser {
            cursor: Cursor::new(calx_lexer::lex(line)),
        }
    }
}

/// Parse one line into a command.
#[tracing::instrument(level = "trace", skip_all, fields(len = line.len()))]
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    Parser::new(line).parse_command()
}

#[cfg(test)]
mod tests;
