//! Binary operators.
//!
//! Every binary operator belongs to exactly one [`OpCategory`]. The
//! category decides which compatibility predicate the type checker and the
//! evaluator apply to the operand types.

use std::fmt;

/// Binary operators, grouped by category.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Equality
    Equal,
    NotEqual,

    // Comparison
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,

    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Operator category, selecting the operand compatibility rule.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpCategory {
    /// `==` `!=`: both Number or both Boolean.
    Equality,
    /// `<` `<=` `>` `>=`: both Number.
    Comparison,
    /// `+` `-` `*` `/`: both Number.
    Arithmetic,
}

impl BinaryOp {
    /// The category this operator belongs to.
    pub const fn category(self) -> OpCategory {
        match self {
            Self::Equal | Self::NotEqual => OpCategory::Equality,
            Self::Less | Self::LessOrEqual | Self::Greater | Self::GreaterOrEqual => {
                OpCategory::Comparison
            }
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide => OpCategory::Arithmetic,
        }
    }

    /// Source-level symbol, used when re-rendering expressions.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Node name shown by `explain`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equal => "Equal",
            Self::NotEqual => "NotEqual",
            Self::Less => "Less",
            Self::LessOrEqual => "LessOrEqual",
            Self::Greater => "Greater",
            Self::GreaterOrEqual => "GreaterOrEqual",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    /// Binding strength; higher binds tighter.
    ///
    /// - 4: `*` `/`
    /// - 3: `+` `-`
    /// - 2: `<` `<=` `>` `>=`
    /// - 1: `==` `!=`
    pub const fn precedence(self) -> u8 {
        match self.category() {
            OpCategory::Equality => 1,
            OpCategory::Comparison => 2,
            OpCategory::Arithmetic => match self {
                Self::Multiply | Self::Divide => 4,
                _ => 3,
            },
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for OpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpCategory::Equality => write!(f, "equality"),
            OpCategory::Comparison => write!(f, "comparison"),
            OpCategory::Arithmetic => write!(f, "arithmetic"),
        }
    }
}
