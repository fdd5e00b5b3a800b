//! Lifecycle callbacks wired into the host's build events.

use crate::config::{AUTORENDER_SCRIPT, KatexConfig};
use crate::error::ExtensionError;
use crate::host::{BuildOutcome, ExtensionHost};
use log::debug;
use std::fs;

/// Validates the asset configuration and registers the KaTeX assets.
///
/// Runs once the host has instantiated its builder. Registration order
/// is fixed: the stylesheet, then the KaTeX bundle, the auto-render
/// contrib script and finally the generated bootstrap script.
pub fn builder_inited(
    app: &mut dyn ExtensionHost,
    config: &KatexConfig,
) -> Result<(), ExtensionError> {
    if config.css_path.is_empty()
        || config.js_path.is_empty()
        || config.autorender_path.is_empty()
    {
        return Err(ExtensionError::AssetPathsNotSet);
    }
    if config
        .inline
        .iter()
        .chain(config.display.iter())
        .any(|delimiter| delimiter.is_empty())
    {
        return Err(ExtensionError::DelimitersNotSet);
    }
    app.add_stylesheet(&config.css_path);
    app.add_script(&config.js_path);
    app.add_script(&config.autorender_path);
    app.add_script(AUTORENDER_SCRIPT);
    Ok(())
}

/// Writes the auto-render bootstrap script into the HTML output tree.
///
/// No-op for non-HTML builders and for failed builds. The file is
/// rewritten on every successful HTML build.
pub fn build_finished(
    outcome: &BuildOutcome,
    config: &KatexConfig,
) -> Result<(), ExtensionError> {
    if outcome.builder != "html" || outcome.error.is_some() {
        return Ok(());
    }
    let target = outcome.outdir.join("_static").join(AUTORENDER_SCRIPT);
    debug!("writing {}", target.display());
    fs::write(&target, autorender_source(&config.macros))?;
    Ok(())
}

/// Source of the generated bootstrap script: the macro options object
/// followed by the call that typesets the document body.
fn autorender_source(macros: &str) -> String {
    [
        "latex_options = { macros: {",
        macros,
        "}}",
        "renderMathInElement(document.body, latex_options);",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autorender_source_embeds_macros_verbatim() {
        let source = autorender_source(r#""\\x": "\\mathbf{x}""#);
        assert_eq!(
            source,
            "latex_options = { macros: {\n\
             \"\\\\x\": \"\\\\mathbf{x}\"\n\
             }}\n\
             renderMathInElement(document.body, latex_options);"
        );
    }

    #[test]
    fn autorender_source_without_macros_keeps_wrapper() {
        let source = autorender_source("");
        assert!(source.starts_with("latex_options = { macros: {\n\n}}"));
        assert!(source.ends_with("renderMathInElement(document.body, latex_options);"));
    }
}
