//! Conversion of LaTeX macro definitions into renderer options.
//!
//! The same table feeds two consumers: the LaTeX builder gets verbatim
//! `\newcommand` lines for its preamble, and the generated auto-render
//! script gets a JSON-escaped `macros` object body.

use serde_json::Value;
use std::collections::BTreeMap;

/// Macro name (leading backslash included) to LaTeX replacement text.
///
/// A `BTreeMap` keeps iteration deterministic: all generated output is
/// ordered lexicographically by macro name.
pub type MacroTable = BTreeMap<String, String>;

/// Renders the table as the body of a KaTeX `macros` option object.
///
/// Output is comma-separated `"name": "replacement"` pairs with both
/// sides JSON-escaped. Wrapping the result in braces yields a valid
/// JSON object that parses back to the input table.
pub fn katex_macro_options(table: &MacroTable) -> String {
    table
        .iter()
        .map(|(name, replacement)| {
            format!(
                "{}: {}",
                Value::String(name.clone()),
                Value::String(replacement.clone())
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the table as `\newcommand` lines for a LaTeX preamble.
pub fn latex_newcommands(table: &MacroTable) -> String {
    table
        .iter()
        .map(|(name, replacement)| format!("\\newcommand{{{}}}{{{}}}", name, replacement))
        .collect::<Vec<_>>()
        .join("\n")
}
