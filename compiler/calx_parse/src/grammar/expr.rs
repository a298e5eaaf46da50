//! Expression parsing.
//!
//! ```text
//! expr      := function | equality
//! function  := '(' [param (',' param)*] ')' '->' expr
//! param     := IDENT ':' type
//! type      := 'Number' | 'Boolean'
//! equality  := compare (('==' | '!=') compare)*
//! compare   := sum (('<' | '<=' | '>' | '>=') sum)*
//! sum       := product (('+' | '-') product)*
//! product   := unary (('*' | '/') unary)*
//! unary     := '-' unary | primary
//! primary   := NUMBER | 'true' | 'false' | '#' | IDENT '(' [expr (',' expr)*] ')'
//!            | IDENT | '(' expr ')'
//! ```

use calx_ir::{BinaryOp, Expr, ExprRef, Name, Parameter, Type};
use calx_lexer::TokenKind;
use calx_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested parentheses cannot
    /// overflow the native stack.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprRef, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<ExprRef, ParseError> {
        if self.at_function_literal() {
            self.parse_function()
        } else {
            self.parse_equality()
        }
    }

    /// `(` starts a function literal when followed by `) ->` or `IDENT :`.
    fn at_function_literal(&self) -> bool {
        if !self.cursor.check(&TokenKind::LParen) {
            return false;
        }
        matches!(
            (self.cursor.peek_kind(1), self.cursor.peek_kind(2)),
            (TokenKind::RParen, TokenKind::Arrow) | (TokenKind::Ident(_), TokenKind::Colon)
        )
    }

    fn parse_function(&mut self) -> Result<ExprRef, ParseError> {
        let open = self.cursor.advance().span;
        let mut params = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                params.push(self.parse_param()?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_close(open)?;
        self.cursor.expect(&TokenKind::Arrow, "`->`")?;
        let body = self.parse_expr()?;
        Ok(Expr::function(params, body))
    }

    fn parse_param(&mut self) -> Result<Parameter, ParseError> {
        let name = self.parse_ident()?;
        self.cursor.expect(&TokenKind::Colon, "`:`")?;
        let ty = self.parse_type()?;
        Ok(Parameter::new(name, ty))
    }

    fn parse_type(&mut self) -> Result<Type, ParseError> {
        let ty = match self.cursor.current_kind() {
            TokenKind::NumberType => Type::NUMBER,
            TokenKind::BooleanType => Type::BOOLEAN,
            other => {
                let err = ParseError::expected_type(other.clone(), self.cursor.current_span());
                return Err(self.cursor.error_here(err));
            }
        };
        self.cursor.advance();
        Ok(ty)
    }

    /// Parse one left-associative binary level.
    fn parse_binary_level(
        &mut self,
        match_op: fn(&TokenKind) -> Option<BinaryOp>,
        next: fn(&mut Self) -> Result<ExprRef, ParseError>,
    ) -> Result<ExprRef, ParseError> {
        let mut left = next(self)?;
        while let Some(op) = match_op(self.cursor.current_kind()) {
            self.cursor.advance();
            let right = next(self)?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// Parse `==` and `!=`.
    fn parse_equality(&mut self) -> Result<ExprRef, ParseError> {
        self.parse_binary_level(
            |kind| match kind {
                TokenKind::EqEq => Some(BinaryOp::Equal),
                TokenKind::NotEq => Some(BinaryOp::NotEqual),
                _ => None,
            },
            Self::parse_comparison,
        )
    }

    /// Parse `<`, `<=`, `>`, `>=`.
    fn parse_comparison(&mut self) -> Result<ExprRef, ParseError> {
        self.parse_binary_level(
            |kind| match kind {
                TokenKind::Lt => Some(BinaryOp::Less),
                TokenKind::LtEq => Some(BinaryOp::LessOrEqual),
                TokenKind::Gt => Some(BinaryOp::Greater),
                TokenKind::GtEq => Some(BinaryOp::GreaterOrEqual),
                _ => None,
            },
            Self::parse_sum,
        )
    }

    /// Parse `+` and `-`.
    fn parse_sum(&mut self) -> Result<ExprRef, ParseError> {
        self.parse_binary_level(
            |kind| match kind {
                TokenKind::Plus => Some(BinaryOp::Add),
                TokenKind::Minus => Some(BinaryOp::Subtract),
                _ => None,
            },
            Self::parse_product,
        )
    }

    /// Parse `*` and `/`.
    fn parse_product(&mut self) -> Result<ExprRef, ParseError> {
        self.parse_binary_level(
            |kind| match kind {
                TokenKind::Star => Some(BinaryOp::Multiply),
                TokenKind::Slash => Some(BinaryOp::Divide),
                _ => None,
            },
            Self::parse_unary,
        )
    }

    /// Parse prefix `-`.
    ///
    /// A negated literal folds into a negative literal; anything else
    /// becomes `0 - operand`.
    fn parse_unary(&mut self) -> Result<ExprRef, ParseError> {
        if !self.cursor.eat(&TokenKind::Minus) {
            return self.parse_primary();
        }
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        if let Expr::Number(value) = *operand {
            return Ok(Expr::number(-value));
        }
        Ok(Expr::binary(BinaryOp::Subtract, Expr::number(0.0), operand))
    }

    fn parse_primary(&mut self) -> Result<ExprRef, ParseError> {
        let token = self.cursor.current().clone();
        match token.kind {
            TokenKind::Number(value) => {
                self.cursor.advance();
                Ok(Expr::number(value))
            }
            TokenKind::True => {
                self.cursor.advance();
                Ok(Expr::boolean(true))
            }
            TokenKind::False => {
                self.cursor.advance();
                Ok(Expr::boolean(false))
            }
            TokenKind::Hash => {
                self.cursor.advance();
                Ok(Expr::symbol(Name::LAST_RESULT))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                if self.cursor.check(&TokenKind::LParen) {
                    self.parse_call(name)
                } else {
                    Ok(Expr::symbol(name))
                }
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.expect_close(token.span)?;
                Ok(inner)
            }
            found => {
                let err = ParseError::expected_expression(found, token.span);
                Err(self.cursor.error_here(err))
            }
        }
    }

    fn parse_call(&mut self, callee: Name) -> Result<ExprRef, ParseError> {
        let open = self.cursor.advance().span;
        let mut args = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_close(open)?;
        Ok(Expr::call(callee, args))
    }

    /// Consume the `)` matching the `(` at `open`.
    fn expect_close(&mut self, open: calx_ir::Span) -> Result<(), ParseError> {
        if self.cursor.eat(&TokenKind::RParen) {
            return Ok(());
        }
        let token = self.cursor.current();
        let err = ParseError::unclosed(token.kind.clone(), open, token.span);
        Err(self.cursor.error_here(err))
    }
}
