//! Two-column ASCII tables for symbol listings.
//!
//! ```text
//! .----------------------------.
//! | Ident | Expression         |
//! |-------|--------------------|
//! | #     | Number: 0          |
//! '----------------------------'
//! ```

use std::fmt::Write;

/// Render `rows` under `heading`, columns sized to their widest cell.
pub fn render(heading: (&str, &str), rows: &[(String, String)]) -> String {
    let width = |text: &str| text.chars().count();
    let left = rows
        .iter()
        .map(|(cell, _)| width(cell))
        .chain(std::iter::once(width(heading.0)))
        .max()
        .unwrap_or(0);
    let right = rows
        .iter()
        .map(|(_, cell)| width(cell))
        .chain(std::iter::once(width(heading.1)))
        .max()
        .unwrap_or(0);
    let rule = "-".repeat(left + right + 5);

    let mut out = String::new();
    let _ = writeln!(out, ".{rule}.");
    let _ = writeln!(out, "| {:<left$} | {:<right$} |", heading.0, heading.1);
    let _ = writeln!(out, "|{}|{}|", "-".repeat(left + 2), "-".repeat(right + 2));
    for (ident, description) in rows {
        let _ = writeln!(out, "| {ident:<left$} | {description:<right$} |");
    }
    let _ = write!(out, "'{rule}'");
    out
}
