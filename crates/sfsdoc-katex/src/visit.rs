//! HTML emission for math nodes.
//!
//! The host dispatches to these visitors instead of its default math
//! renderer. Each visitor returns the finished markup together with a
//! `suppress_default` flag that the caller interprets; the default
//! handler must not also run for the same node.

use crate::config::KatexConfig;
use crate::nodes::{DisplayMathNode, EquationNumbering, InlineMathNode};
use serde::{Deserialize, Serialize};

/// Result of visiting one math node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitOutput {
    /// Markup to splice into the HTML body.
    pub markup: String,
    /// The host must skip its own rendering of this node.
    pub suppress_default: bool,
}

/// Signature of the inline visitor the host dispatches to.
pub type InlineMathVisitor = fn(&KatexConfig, &InlineMathNode) -> VisitOutput;

/// Signature of the display visitor the host dispatches to.
pub type DisplayMathVisitor =
    fn(&KatexConfig, &dyn EquationNumbering, &DisplayMathNode) -> VisitOutput;

/// Renders an inline math node as `<span class="math">...</span>`.
///
/// The expression is HTML-encoded and wrapped in the configured inline
/// delimiter pair; the auto-render script picks the span up client
/// side.
pub fn inline_math(config: &KatexConfig, node: &InlineMathNode) -> VisitOutput {
    let mut markup = starttag("span", &node.ids);
    markup.push_str(&config.inline[0]);
    markup.push_str(&encode(&node.latex));
    markup.push_str(&config.inline[1]);
    markup.push_str("</span>");
    VisitOutput {
        markup,
        suppress_default: true,
    }
}

/// Renders a display math node as `<div class="math">...</div>`.
///
/// Numbered equations get a permalink anchor ahead of the expression.
/// The wrapped expression is inserted raw; only the nowrap path
/// encodes, unlike inline math which is always encoded.
pub fn display_math(
    config: &KatexConfig,
    numbering: &dyn EquationNumbering,
    node: &DisplayMathNode,
) -> VisitOutput {
    let mut markup = starttag("div", &node.ids);
    if node.nowrap {
        markup.push_str(&encode(&node.latex));
        markup.push_str("</div>");
        return VisitOutput {
            markup,
            suppress_default: true,
        };
    }
    if node.numbered {
        if let Some(id) = node.primary_id() {
            if let Some(number) = numbering.equation_number(id) {
                markup.push_str(&format!(
                    "<span class=\"eqno\"><a class=\"equationlink\" href=\"#{}\" \
                     title=\"Permalink to this equation\">({})</a></span>",
                    id, number
                ));
            }
        }
    }
    markup.push_str(&config.display[0]);
    markup.push_str(&node.latex);
    markup.push_str(&config.display[1]);
    markup.push_str("</div>\n");
    VisitOutput {
        markup,
        suppress_default: true,
    }
}

fn starttag(tag: &str, ids: &[String]) -> String {
    match ids.first() {
        Some(id) => format!("<{} class=\"math\" id=\"{}\">", tag, encode(id)),
        None => format!("<{} class=\"math\">", tag),
    }
}

/// Minimal HTML encoder for text interpolated into markup.
fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_numbers() -> HashMap<String, u64> {
        HashMap::new()
    }

    #[test]
    fn inline_wraps_with_configured_delimiters() {
        let mut config = KatexConfig::default();
        config.inline = ["$".to_string(), "$".to_string()];
        let out = inline_math(&config, &InlineMathNode::new("x^2"));
        assert_eq!(out.markup, "<span class=\"math\">$x^2$</span>");
        assert!(out.suppress_default);
    }

    #[test]
    fn inline_encodes_html_sensitive_characters() {
        let config = KatexConfig::default();
        let out = inline_math(&config, &InlineMathNode::new("a < b"));
        assert_eq!(out.markup, "<span class=\"math\">\\(a &lt; b\\)</span>");
    }

    #[test]
    fn inline_encodes_ampersand() {
        let config = KatexConfig::default();
        let out = inline_math(&config, &InlineMathNode::new("a & b"));
        assert!(out.markup.contains("a &amp; b"));
    }

    #[test]
    fn display_leaves_wrapped_expression_raw() {
        let config = KatexConfig::default();
        let out = display_math(&config, &no_numbers(), &DisplayMathNode::new("a < b"));
        assert_eq!(out.markup, "<div class=\"math\">\\[a < b\\]</div>\n");
    }

    #[test]
    fn display_nowrap_encodes_and_skips_delimiters() {
        let config = KatexConfig::default();
        let mut node = DisplayMathNode::new("a < b");
        node.nowrap = true;
        let out = display_math(&config, &no_numbers(), &node);
        assert_eq!(out.markup, "<div class=\"math\">a &lt; b</div>");
        assert!(out.suppress_default);
    }

    #[test]
    fn display_unnumbered_has_no_equation_anchor() {
        let config = KatexConfig::default();
        let out = display_math(&config, &no_numbers(), &DisplayMathNode::new("y = x"));
        assert!(!out.markup.contains("eqno"));
    }

    #[test]
    fn display_numbered_emits_permalink_anchor() {
        let config = KatexConfig::default();
        let mut node = DisplayMathNode::new("y = x");
        node.numbered = true;
        node.ids = vec!["eq:1".to_string()];
        let mut numbers = HashMap::new();
        numbers.insert("eq:1".to_string(), 3);
        let out = display_math(&config, &numbers, &node);
        assert!(out.markup.contains(
            "<span class=\"eqno\"><a class=\"equationlink\" href=\"#eq:1\" \
             title=\"Permalink to this equation\">(3)</a></span>"
        ));
        assert!(out.markup.ends_with("\\[y = x\\]</div>\n"));
    }

    #[test]
    fn display_numbered_without_assigned_number_omits_anchor() {
        let config = KatexConfig::default();
        let mut node = DisplayMathNode::new("y = x");
        node.numbered = true;
        node.ids = vec!["eq:unassigned".to_string()];
        let out = display_math(&config, &no_numbers(), &node);
        assert!(!out.markup.contains("eqno"));
    }

    #[test]
    fn node_ids_become_element_ids() {
        let config = KatexConfig::default();
        let mut node = DisplayMathNode::new("y = x");
        node.ids = vec!["eq:5".to_string()];
        let out = display_math(&config, &no_numbers(), &node);
        assert!(out.markup.starts_with("<div class=\"math\" id=\"eq:5\">"));
    }
}
