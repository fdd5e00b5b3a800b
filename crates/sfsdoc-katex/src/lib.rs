//! # sfsdoc-katex
//!
//! KaTeX math rendering hook for the SFS documentation build.
//!
//! ## Overview
//!
//! The host documentation framework renders math nodes through a
//! generic fallback that this extension replaces with KaTeX markup.
//! Expressions are emitted wrapped in configurable delimiters and
//! typeset in the browser by KaTeX's auto-render script; nothing is
//! rendered at build time.
//!
//! Five callbacks make up the extension:
//!
//! - [`visit::inline_math`] / [`visit::display_math`] - per-node HTML
//!   emission, returning an explicit "skip the default renderer" flag
//! - [`hooks::builder_inited`] - asset path validation plus stylesheet
//!   and script registration
//! - [`hooks::build_finished`] - writes `_static/katex_autorenderer.js`
//!   into the HTML output tree
//! - [`setup`] - wires everything into the host and declares the six
//!   `katex_*` configuration values
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  setup(&mut dyn ExtensionHost)  ┌──────────────┐
//! │  host build  │ ───────────────────────────────▶│ sfsdoc-katex │
//! │  framework   │ ◀─────────────────────────────── │              │
//! └──────────────┘  visitors, config values, hooks └──────────────┘
//! ```
//!
//! The host side is abstracted behind [`host::ExtensionHost`];
//! [`host::RecordingHost`] is an in-memory double for tests.
//!
//! ## Examples
//!
//! ```
//! use sfsdoc_katex::host::RecordingHost;
//!
//! let mut app = RecordingHost::new();
//! let meta = sfsdoc_katex::setup(&mut app).unwrap();
//! assert!(meta.parallel_read_safe);
//! assert_eq!(app.config_values.len(), 6);
//! ```

pub mod config;
pub mod error;
pub mod hooks;
pub mod host;
pub mod macros;
pub mod nodes;
pub mod visit;

pub use config::{AUTORENDER_SCRIPT, KATEX_CDN_BASE, KATEX_CDN_VERSION, KatexConfig};
pub use error::ExtensionError;
pub use macros::{MacroTable, katex_macro_options, latex_newcommands};

use host::{ConfigValue, ExtensionHost, RebuildScope};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Capability descriptor returned from [`setup`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionMetadata {
    pub version: String,
    /// The extension holds no cross-invocation state, so the host may
    /// parallelize its read phase.
    pub parallel_read_safe: bool,
}

/// Registers the extension against the host framework.
///
/// Claims the math node types, declares the `katex_*` configuration
/// values and subscribes the lifecycle hooks.
///
/// # Errors
///
/// [`ExtensionError::MathRendererConflict`] if another math rendering
/// extension already claimed the math node types.
pub fn setup(app: &mut dyn ExtensionHost) -> Result<ExtensionMetadata, ExtensionError> {
    app.register_math_visitors(visit::inline_math, visit::display_math)
        .map_err(|_| ExtensionError::MathRendererConflict)?;

    let cdn = format!("{}{}", KATEX_CDN_BASE, KATEX_CDN_VERSION);
    app.add_config_value(ConfigValue::new(
        "katex_css_path",
        json!(format!("{}/katex.min.css", cdn)),
        RebuildScope::Environment,
    ));
    app.add_config_value(ConfigValue::new(
        "katex_js_path",
        json!(format!("{}/katex.min.js", cdn)),
        RebuildScope::Environment,
    ));
    // github.com/Khan/KaTeX/blob/master/contrib/auto-render/README.md
    app.add_config_value(ConfigValue::new(
        "katex_autorender_path",
        json!(format!("{}/contrib/auto-render.min.js", cdn)),
        RebuildScope::Environment,
    ));
    app.add_config_value(ConfigValue::new(
        "katex_inline",
        json!([r"\(", r"\)"]),
        RebuildScope::Html,
    ));
    app.add_config_value(ConfigValue::new(
        "katex_display",
        json!([r"\[", r"\]"]),
        RebuildScope::Html,
    ));
    app.add_config_value(ConfigValue::new("katex_macros", json!(""), RebuildScope::Html));

    app.connect_builder_inited(hooks::builder_inited);
    app.connect_build_finished(hooks::build_finished);

    Ok(ExtensionMetadata {
        version: "0.1".to_string(),
        parallel_read_safe: true,
    })
}
