//! Static types and their compatibility rules.
//!
//! Number and Boolean are plain unit variants exposed as the constants
//! [`Type::NUMBER`] and [`Type::BOOLEAN`], so comparing against them is a
//! tag check. Function types are built per signature and compared
//! structurally.

use std::fmt;
use std::rc::Rc;

use crate::ast::OpCategory;
use crate::value::Value;

/// The static type of an expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Number,
    Boolean,
    Function(Rc<FunctionType>),
}

/// Parameter and result types of a function.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub params: Vec<Type>,
    pub result: Type,
}

impl Type {
    pub const NUMBER: Type = Type::Number;
    pub const BOOLEAN: Type = Type::Boolean;

    /// Build a function type.
    pub fn function(params: Vec<Type>, result: Type) -> Type {
        Type::Function(Rc::new(FunctionType { params, result }))
    }

    /// Display caption: `Number`, `Boolean` or `Function[(T1, T2) -> R]`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// The function signature, if this is a function type.
    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            Type::Function(function) => Some(function),
            Type::Number | Type::Boolean => None,
        }
    }

    /// The value an unbound parameter of this type evaluates to.
    ///
    /// Function types have no default.
    pub fn default_value(&self) -> Option<Value> {
        match self {
            Type::Number => Some(Value::Number(0.0)),
            Type::Boolean => Some(Value::Boolean(false)),
            Type::Function(_) => None,
        }
    }
}

/// `==` / `!=`: both Number or both Boolean.
pub fn equality_compatible(left: &Type, right: &Type) -> bool {
    matches!(
        (left, right),
        (Type::Number, Type::Number) | (Type::Boolean, Type::Boolean)
    )
}

/// `<` `<=` `>` `>=`: both Number.
pub fn comparison_compatible(left: &Type, right: &Type) -> bool {
    matches!((left, right), (Type::Number, Type::Number))
}

/// `+` `-` `*` `/`: both Number.
pub fn calculation_compatible(left: &Type, right: &Type) -> bool {
    matches!((left, right), (Type::Number, Type::Number))
}

/// General compatibility, used for call arguments.
pub fn are_compatible(left: &Type, right: &Type) -> bool {
    equality_compatible(left, right)
}

/// The predicate for an operator category.
pub fn compatible_for(category: OpCategory, left: &Type, right: &Type) -> bool {
    match category {
        OpCategory::Equality => equality_compatible(left, right),
        OpCategory::Comparison => comparison_compatible(left, right),
        OpCategory::Arithmetic => calculation_compatible(left, right),
    }
}

/// Result type of a binary operation whose operands passed their check.
///
/// Always the left operand's type, comparisons included.
pub fn combine_types(left: &Type, _right: &Type) -> Type {
    left.clone()
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Number => f.write_str("Number"),
            Type::Boolean => f.write_str("Boolean"),
            Type::Function(function) => write!(f, "Function[{function}]"),
        }
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") -> {}", self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_of_function_type() {
        let ty = Type::function(vec![Type::NUMBER, Type::BOOLEAN], Type::NUMBER);
        assert_eq!(ty.name(), "Function[(Number, Boolean) -> Number]");
        assert_eq!(Type::function(vec![], Type::BOOLEAN).name(), "Function[() -> Boolean]");
    }

    #[test]
    fn category_rules() {
        let func = Type::function(vec![], Type::NUMBER);
        assert!(equality_compatible(&Type::BOOLEAN, &Type::BOOLEAN));
        assert!(!equality_compatible(&Type::NUMBER, &Type::BOOLEAN));
        assert!(!equality_compatible(&func, &func));
        assert!(!comparison_compatible(&Type::BOOLEAN, &Type::BOOLEAN));
        assert!(calculation_compatible(&Type::NUMBER, &Type::NUMBER));
        assert!(!calculation_compatible(&Type::NUMBER, &Type::BOOLEAN));
    }

    #[test]
    fn combine_keeps_left() {
        assert_eq!(combine_types(&Type::BOOLEAN, &Type::NUMBER), Type::BOOLEAN);
    }

    #[test]
    fn defaults() {
        assert_eq!(Type::NUMBER.default_value(), Some(Value::Number(0.0)));
        assert_eq!(Type::BOOLEAN.default_value(), Some(Value::Boolean(false)));
        assert_eq!(Type::function(vec![], Type::NUMBER).default_value(), None);
    }
}
