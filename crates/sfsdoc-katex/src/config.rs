use serde::{Deserialize, Serialize};

/// Base URL for the KaTeX CDN assets.
pub const KATEX_CDN_BASE: &str = "https://cdnjs.cloudflare.com/ajax/libs/KaTeX/";

/// Pinned KaTeX release served from the CDN.
///
/// This pins the client-side renderer only. It is unrelated to the
/// documentation project's own release string.
pub const KATEX_CDN_VERSION: &str = "0.9.0-alpha1";

/// Name of the generated auto-render bootstrap script.
pub const AUTORENDER_SCRIPT: &str = "katex_autorenderer.js";

/// The six extension-owned settings, resolved by the host from the
/// declared defaults plus any project overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KatexConfig {
    /// Stylesheet for the KaTeX fonts and layout classes.
    pub css_path: String,
    /// The KaTeX renderer bundle.
    pub js_path: String,
    /// The auto-render contrib script that scans the document body.
    pub autorender_path: String,
    /// Delimiter pair wrapped around inline expressions.
    pub inline: [String; 2],
    /// Delimiter pair wrapped around display expressions.
    pub display: [String; 2],
    /// Macro options body, see [`katex_macro_options`](crate::macros::katex_macro_options).
    pub macros: String,
}

impl Default for KatexConfig {
    fn default() -> Self {
        let cdn = format!("{}{}", KATEX_CDN_BASE, KATEX_CDN_VERSION);
        Self {
            css_path: format!("{}/katex.min.css", cdn),
            js_path: format!("{}/katex.min.js", cdn),
            autorender_path: format!("{}/contrib/auto-render.min.js", cdn),
            inline: [r"\(".to_string(), r"\)".to_string()],
            display: [r"\[".to_string(), r"\]".to_string()],
            macros: String::new(),
        }
    }
}
