//! Binary operator evaluation.
//!
//! Operand values are re-checked with the same category predicates the type
//! checker uses, so an expression that was never type-checked still cannot
//! add a boolean to a number. Arithmetic follows IEEE-754: division by zero
//! yields an infinity or NaN, not an error.

use calx_ir::ty::compatible_for;
use calx_ir::{BinaryOp, Type, Value};

use crate::errors::{incompatible, EvalErrorKind};

/// The static type a value would check as, without looking into closures.
///
/// Functions never satisfy an operator rule, so their signature is not
/// needed here.
pub(crate) fn shallow_type(value: &Value) -> Option<Type> {
    match value {
        Value::Number(_) => Some(Type::NUMBER),
        Value::Boolean(_) => Some(Type::BOOLEAN),
        Value::Function(_) => None,
    }
}

/// Evaluate `left op right` on already evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    let compatible = match (shallow_type(left), shallow_type(right)) {
        (Some(l), Some(r)) => compatible_for(op.category(), &l, &r),
        _ => false,
    };
    let mismatch = || incompatible(left.type_name(), right.type_name());
    if !compatible {
        return Err(mismatch());
    }

    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(eval_number_binary(op, *l, *r)),
        (Value::Boolean(l), Value::Boolean(r)) => match op {
            BinaryOp::Equal => Ok(Value::Boolean(l == r)),
            BinaryOp::NotEqual => Ok(Value::Boolean(l != r)),
            _ => Err(mismatch()),
        },
        _ => Err(mismatch()),
    }
}

fn eval_number_binary(op: BinaryOp, l: f64, r: f64) -> Value {
    match op {
        BinaryOp::Equal => Value::Boolean(l == r),
        BinaryOp::NotEqual => Value::Boolean(l != r),
        BinaryOp::Less => Value::Boolean(l < r),
        BinaryOp::LessOrEqual => Value::Boolean(l <= r),
        BinaryOp::Greater => Value::Boolean(l > r),
        BinaryOp::GreaterOrEqual => Value::Boolean(l >= r),
        BinaryOp::Add => Value::Number(l + r),
        BinaryOp::Subtract => Value::Number(l - r),
        BinaryOp::Multiply => Value::Number(l * r),
        BinaryOp::Divide => Value::Number(l / r),
    }
}
