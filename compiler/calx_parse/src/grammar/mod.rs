//! Grammar rules.
//!
//! ```text
//! command   := 'let' IDENT '=' expr | 'explain' expr | 'symbols'
//!            | 'exit' | 'quit' | expr
//! ```
//!
//! Expression rules live in `expr`.

mod expr;

use calx_ir::{Command, Name};
use calx_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser {
    /// Parse a full command and require the line to end after it.
    pub(crate) fn parse_command(&mut self) -> Result<Command, ParseError> {
        let command = match self.cursor.current_kind().clone() {
            TokenKind::Let => {
                self.cursor.advance();
                let ident = self.parse_ident()?;
                self.cursor.expect(&TokenKind::Eq, "`=`")?;
                let expr = self.parse_expr()?;
                Command::Let { ident, expr }
            }
            TokenKind::Explain => {
                self.cursor.advance();
                Command::Explain(self.parse_expr()?)
            }
            TokenKind::Symbols => {
                self.cursor.advance();
                Command::Symbols
            }
            TokenKind::Exit | TokenKind::Quit => {
                self.cursor.advance();
                Command::Exit
            }
            _ => Command::Expression(self.parse_expr()?),
        };

        if !self.cursor.is_at_end() {
            let token = self.cursor.current();
            let err = ParseError::trailing_input(token.kind.clone(), token.span);
            return Err(self.cursor.error_here(err));
        }
        Ok(command)
    }

    pub(crate) fn parse_ident(&mut self) -> Result<Name, ParseError> {
        let token = self.cursor.current();
        if let TokenKind::Ident(name) = &token.kind {
            let name = name.clone();
            self.cursor.advance();
            Ok(name)
        } else {
            let err = ParseError::expected_identifier(token.kind.clone(), token.span);
            Err(self.cursor.error_here(err))
        }
    }
}
