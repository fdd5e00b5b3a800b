//! # sfsdoc-conf
//!
//! Static build configuration for the Sound Field Synthesis manual.
//!
//! The host documentation framework consumes [`ProjectConfig`] at
//! startup: project metadata, the enabled extensions, HTML and LaTeX
//! builder settings, and the shared acronym and math-macro
//! definitions. The only two derived values are the release string
//! (`git describe --tags --always`, with a silent `<unknown>`
//! fallback) and the KaTeX macro options produced by the
//! `sfsdoc-katex` transform; everything else is plain data the
//! framework reads as-is.

pub mod definitions;
pub mod project;
pub mod release;

pub use project::{HtmlConfig, LatexConfig, LatexDocument, PlotConfig, ProjectConfig};
pub use release::{CommandExecutor, RELEASE_FALLBACK, RealCommandExecutor, resolve_release};

use sfsdoc_katex::host::ExtensionHost;

/// Registers the project's own static assets with the host.
///
/// Adds the stylesheet backing the abbreviation substitutions from
/// [`definitions::ACRONYMS`].
pub fn setup(app: &mut dyn ExtensionHost) {
    app.add_stylesheet("css/abbr.css");
}
