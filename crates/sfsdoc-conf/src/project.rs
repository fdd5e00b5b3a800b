//! The project configuration record consumed by the host framework.

use crate::definitions::{ACRONYMS, LATEX_MACROS};
use crate::release::{CommandExecutor, RealCommandExecutor, resolve_release};
use serde::{Deserialize, Serialize};
use sfsdoc_katex::{katex_macro_options, latex_newcommands};

/// Plot directive settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Show the plotting source above each rendered figure.
    pub include_source: bool,
    pub html_show_source_link: bool,
    pub html_show_formats: bool,
    pub formats: Vec<String>,
    /// Figure size in inches, width by height.
    pub figure_size: [f64; 2],
}

/// HTML builder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlConfig {
    pub theme: String,
    /// Directories with extra files copied into the output tree.
    pub static_path: Vec<String>,
    pub title: String,
    /// Shorter title for the navigation bar; empty means use `title`.
    pub short_title: String,
    /// Show the "generated by" line in the page footer.
    pub show_generator: bool,
    /// Output file base name for the HTML help builder.
    pub help_basename: String,
}

/// One LaTeX document produced from the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatexDocument {
    /// Source document the tree is grouped under.
    pub start_doc: String,
    /// Target .tex file name.
    pub target: String,
    pub title: String,
    pub author: String,
    /// Document class, "manual" or "howto".
    pub class: String,
    pub toctree_only: bool,
}

/// LaTeX builder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatexConfig {
    pub papersize: String,
    pub pointsize: String,
    /// Macro definitions prepended to every generated document.
    pub preamble: String,
    pub figure_align: String,
    /// Formatting overrides passed through to the output styling layer.
    pub setup: String,
    pub documents: Vec<LatexDocument>,
}

/// Every static setting the host framework needs for a build.
///
/// Constructed once at startup, read-only afterwards. The only derived
/// values are `release` (from the source revision) and `katex_macros`
/// (from the shared macro table); everything else is plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project: String,
    pub copyright: String,
    pub author: String,
    /// Resolved from the source revision, `<unknown>` when that fails.
    pub release: String,
    /// Minimum host framework version this configuration relies on.
    pub needs_version: String,
    /// Framework plugins to activate, in declaration order.
    pub extensions: Vec<String>,
    /// Number figures and tables so they can be referenced.
    pub numfig: bool,
    pub source_suffix: String,
    /// The root document of the tree.
    pub master_doc: String,
    pub exclude_patterns: Vec<String>,
    /// Append `()` to cross-referenced function names.
    pub add_function_parentheses: bool,
    /// Syntax highlighting style.
    pub pygments_style: String,
    pub todo_include_todos: bool,
    /// Appended to every source page; carries the acronym block.
    pub rst_epilog: String,
    /// KaTeX macro options derived from the shared macro table.
    pub katex_macros: String,
    pub plot: PlotConfig,
    pub html: HtmlConfig,
    pub latex: LatexConfig,
}

impl ProjectConfig {
    /// Builds the configuration, resolving the release from git.
    pub fn load() -> Self {
        Self::with_executor(&RealCommandExecutor)
    }

    /// Builds the configuration with a custom command executor.
    pub fn with_executor(executor: &dyn CommandExecutor) -> Self {
        Self {
            project: "Sound Field Synthesis".to_string(),
            copyright: "2016, SFS Toolbox Developers".to_string(),
            author: "SFS Toolbox Developers".to_string(),
            release: resolve_release(executor),
            needs_version: "1.3".to_string(),
            extensions: vec![
                "ext.autodoc".to_string(),
                "ext.viewcode".to_string(),
                "sfsdoc_katex".to_string(),
                "ext.plot_directive".to_string(),
            ],
            numfig: true,
            source_suffix: ".rst".to_string(),
            master_doc: "index".to_string(),
            exclude_patterns: vec!["_build".to_string()],
            add_function_parentheses: true,
            pygments_style: "trac".to_string(),
            todo_include_todos: false,
            rst_epilog: ACRONYMS.to_string(),
            katex_macros: katex_macro_options(&LATEX_MACROS),
            plot: PlotConfig {
                include_source: true,
                html_show_source_link: false,
                html_show_formats: false,
                formats: vec!["png".to_string()],
                figure_size: [8.0, 4.5],
            },
            html: HtmlConfig {
                theme: "sphinx_rtd_theme".to_string(),
                static_path: vec!["_static".to_string()],
                title: "SFS Toolbox".to_string(),
                short_title: String::new(),
                show_generator: false,
                help_basename: "sfs-doc".to_string(),
            },
            latex: LatexConfig {
                papersize: "a4paper".to_string(),
                pointsize: "10pt".to_string(),
                preamble: latex_newcommands(&LATEX_MACROS),
                figure_align: "htbp".to_string(),
                setup: "TitleColor={rgb}{0,0,0}, verbatimwithframe=false, \
                        VerbatimColor={rgb}{.96,.96,.96}"
                    .to_string(),
                documents: vec![LatexDocument {
                    start_doc: "index".to_string(),
                    target: "sfs-toolbox-documentation.tex".to_string(),
                    title: "Theory of Sound Field Synthesis".to_string(),
                    author: "SFS Toolbox Developers".to_string(),
                    class: "manual".to_string(),
                    toctree_only: true,
                }],
            },
        }
    }
}
