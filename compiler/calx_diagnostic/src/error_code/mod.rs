//! Error codes for all calx diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) whose first digit names
//! the phase that produced it.

use std::fmt;

/// Error codes for all calx diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Lexer and parser errors
/// - E2xxx: Type errors
/// - E3xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type name
    E1005,
    /// Invalid character in source
    E1006,
    /// Invalid number literal
    E1007,
    /// Input left over after a complete command
    E1008,

    // Type Errors (E2xxx)
    /// Unknown symbol
    E2001,
    /// Unknown function
    E2002,
    /// Wrong number of arguments
    E2003,
    /// Incompatible operand or argument types
    E2004,
    /// Type checking nested too deeply
    E2005,

    // Evaluation Errors (E3xxx)
    /// Unknown symbol
    E3001,
    /// Unknown function
    E3002,
    /// Wrong number of arguments
    E3003,
    /// Incompatible runtime value types
    E3004,
    /// Recursion limit exceeded
    E3005,
    /// Native function failed
    E3006,
    /// Native function argument not bound
    E3007,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E3004,
        ErrorCode::E3005,
        ErrorCode::E3006,
        ErrorCode::E3007,
    ];

    /// The code as text, e.g. `"E2001"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
        }
    }

    /// One-line description of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected type name",
            ErrorCode::E1006 => "invalid character",
            ErrorCode::E1007 => "invalid number literal",
            ErrorCode::E1008 => "unexpected input after command",
            ErrorCode::E2001 | ErrorCode::E3001 => "unknown symbol",
            ErrorCode::E2002 | ErrorCode::E3002 => "unknown function",
            ErrorCode::E2003 | ErrorCode::E3003 => "wrong number of arguments",
            ErrorCode::E2004 | ErrorCode::E3004 => "incompatible types",
            ErrorCode::E2005 => "type checking nested too deeply",
            ErrorCode::E3005 => "recursion limit exceeded",
            ErrorCode::E3006 => "native function failed",
            ErrorCode::E3007 => "native argument not bound",
        }
    }

    /// Check if this is a lexer or parser error (E1xxx).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a type error (E2xxx).
    pub fn is_type_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is an evaluation error (E3xxx).
    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a code such as `"E2001"`, case-insensitively.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
