use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One inline math expression from the host's parsed document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineMathNode {
    /// Raw LaTeX source of the expression.
    pub latex: String,
    /// Element identifiers assigned by the host, first one is primary.
    #[serde(default)]
    pub ids: Vec<String>,
}

impl InlineMathNode {
    pub fn new(latex: &str) -> Self {
        Self {
            latex: latex.to_string(),
            ids: Vec::new(),
        }
    }
}

/// One display (block-level) math expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayMathNode {
    /// Raw LaTeX source of the expression.
    pub latex: String,
    /// The expression brings its own environment; emit it without
    /// delimiters and without numbering.
    #[serde(default)]
    pub nowrap: bool,
    /// The host assigned this node an equation number.
    #[serde(default)]
    pub numbered: bool,
    /// Element identifiers assigned by the host, first one is primary.
    #[serde(default)]
    pub ids: Vec<String>,
}

impl DisplayMathNode {
    pub fn new(latex: &str) -> Self {
        Self {
            latex: latex.to_string(),
            nowrap: false,
            numbered: false,
            ids: Vec::new(),
        }
    }

    /// Primary element id, when the host assigned any.
    pub fn primary_id(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }
}

/// Lookup into the host's equation numbering registry.
pub trait EquationNumbering {
    /// Number assigned to the element with the given id, if any.
    fn equation_number(&self, id: &str) -> Option<u64>;
}

impl EquationNumbering for HashMap<String, u64> {
    fn equation_number(&self, id: &str) -> Option<u64> {
        self.get(id).copied()
    }
}
