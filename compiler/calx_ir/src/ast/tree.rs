//! ASCII tree rendering of expressions, shown by `explain`.

use std::fmt;

use super::{Expr, Parameter};
use crate::value::format_number;

/// Display adapter rendering an expression as an indented tree.
///
/// ```text
/// Add
/// ├── Number<1>
/// └── Multiply
///     ├── Number<2>
///     └── Number<3>
/// ```
pub struct ExprTree<'a>(&'a Expr);

impl Expr {
    /// Tree view of this expression.
    pub fn tree(&self) -> ExprTree<'_> {
        ExprTree(self)
    }

    /// The single-line label of this node in the tree view.
    pub fn label(&self) -> String {
        match self {
            Expr::Number(value) => format!("Number<{}>", format_number(*value)),
            Expr::Boolean(value) => format!("Boolean<{value}>"),
            Expr::Symbol(name) => format!("Symbol<{name}>"),
            Expr::Binary { op, .. } => op.name().to_string(),
            Expr::Parameter(param) => param_label(param),
            Expr::Function(_) => "Function".to_string(),
            Expr::Call { callee, .. } => format!("Call<{callee}>"),
            Expr::NativeCode(native) => format!("NativeCode<{}>", native.result),
        }
    }
}

fn param_label(param: &Parameter) -> String {
    format!("Parameter<{}: {}>", param.name, param.ty)
}

/// A row in the tree: function parameters are declarations, not child
/// expressions, but still get their own line.
enum Node<'a> {
    Expr(&'a Expr),
    Param(&'a Parameter),
}

impl Node<'_> {
    fn label(&self) -> String {
        match self {
            Node::Expr(expr) => expr.label(),
            Node::Param(param) => param_label(param),
        }
    }

    fn children(&self) -> Vec<Node<'_>> {
        let Node::Expr(expr) = self else {
            return Vec::new();
        };
        match expr {
            Expr::Binary { left, right, .. } => vec![Node::Expr(left), Node::Expr(right)],
            Expr::Function(function) => function
                .params
                .iter()
                .map(Node::Param)
                .chain(std::iter::once(Node::Expr(&function.body)))
                .collect(),
            Expr::Call { args, .. } => args.iter().map(|arg| Node::Expr(arg)).collect(),
            Expr::Number(_)
            | Expr::Boolean(_)
            | Expr::Symbol(_)
            | Expr::Parameter(_)
            | Expr::NativeCode(_) => Vec::new(),
        }
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, node: &Node<'_>, prefix: &str) -> fmt::Result {
    let children = node.children();
    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == count;
        let (branch, extension) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        writeln!(f, "{prefix}{branch}{}", child.label())?;
        write_children(f, child, &format!("{prefix}{extension}"))?;
    }
    Ok(())
}

impl fmt::Display for ExprTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = Node::Expr(self.0);
        writeln!(f, "{}", root.label())?;
        write_children(f, &root, "")
    }
}
