//! One-line descriptions of values for the console.

use calx_ir::{format_number, Value};

/// Describe a value as `Number: 5`, `Boolean: true` or, for closures, the
/// function type caption `Function[(Number) -> Number]`.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Number(n) => format!("Number: {}", format_number(*n)),
        Value::Boolean(b) => format!("Boolean: {b}"),
        Value::Function(_) => match calx_types::value_type(value) {
            Ok(ty) => ty.name(),
            Err(err) => {
                tracing::debug!(%err, "closure type unavailable");
                "Function".to_string()
            }
        },
    }
}
