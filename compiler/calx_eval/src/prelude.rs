//! Built-in bindings installed into a fresh root table.
//!
//! `sum` is an ordinary function literal. Everything else is host code
//! wrapped in a function whose body is a [`NativeCode`](calx_ir::NativeCode)
//! node.

use calx_ir::{BinaryOp, Expr, NativeFn, Parameter, SymbolTable, Type, Value};

/// Bind the prelude into `table`, replacing same-named bindings.
pub fn install(table: &SymbolTable) {
    table.put(
        "sum",
        Expr::function(
            vec![
                Parameter::new("a", Type::NUMBER),
                Parameter::new("b", Type::NUMBER),
            ],
            Expr::binary(BinaryOp::Add, Expr::symbol("a"), Expr::symbol("b")),
        ),
    );

    for &(name, callback) in UNARY {
        table.put(
            name,
            Expr::native_function(
                name,
                vec![Parameter::new("value", Type::NUMBER)],
                Type::NUMBER,
                callback,
            ),
        );
    }

    for &(name, (first, second), callback) in BINARY {
        table.put(
            name,
            Expr::native_function(
                name,
                vec![
                    Parameter::new(first, Type::NUMBER),
                    Parameter::new(second, Type::NUMBER),
                ],
                Type::NUMBER,
                callback,
            ),
        );
    }
}

/// Names of every binding [`install`] creates.
pub fn names() -> impl Iterator<Item = &'static str> {
    std::iter::once("sum")
        .chain(UNARY.iter().map(|(name, _)| *name))
        .chain(BINARY.iter().map(|(name, _, _)| *name))
}

const UNARY: &[(&str, NativeFn)] = &[
    ("sin", sin),
    ("cos", cos),
    ("tan", tan),
    ("sqrt", sqrt),
    ("abs", abs),
    ("exp", exp),
    ("ln", ln),
];

const BINARY: &[(&str, (&str, &str), NativeFn)] = &[
    ("pow", ("base", "exponent"), pow),
    ("min", ("a", "b"), min),
    ("max", ("a", "b"), max),
];

/// Unpack exactly `N` number arguments.
fn numbers<const N: usize>(args: &[Value]) -> Result<[f64; N], String> {
    if args.len() != N {
        return Err(format!("expected {N} arguments, got {}", args.len()));
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg
            .as_number()
            .ok_or_else(|| format!("expected a Number, got {}", arg.type_name()))?;
    }
    Ok(out)
}

macro_rules! unary_natives {
    ($($name:ident => $method:ident),* $(,)?) => {
        $(
            fn $name(args: &[Value]) -> Result<Value, String> {
                let [x] = numbers(args)?;
                Ok(Value::Number(x.$method()))
            }
        )*
    };
}

unary_natives! {
    sin => sin,
    cos => cos,
    tan => tan,
    sqrt => sqrt,
    abs => abs,
    exp => exp,
    ln => ln,
}

fn pow(args: &[Value]) -> Result<Value, String> {
    let [base, exponent] = numbers(args)?;
    Ok(Value::Number(base.powf(exponent)))
}

fn min(args: &[Value]) -> Result<Value, String> {
    let [a, b] = numbers(args)?;
    Ok(Value::Number(a.min(b)))
}

fn max(args: &[Value]) -> Result<Value, String> {
    let [a, b] = numbers(args)?;
    Ok(Value::Number(a.max(b)))
}
