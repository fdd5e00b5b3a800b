use thiserror::Error;

/// Fatal configuration errors raised by the extension.
///
/// These abort the build with a descriptive message and are never
/// retried. Anything else that goes wrong around the extension
/// (malformed math, unknown config keys) is reported by the host
/// framework itself.
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// One of the three KaTeX asset paths is empty at builder-init time.
    #[error("katex paths not set")]
    AssetPathsNotSet,

    /// A delimiter pair was configured with an empty member.
    #[error("katex delimiters not set")]
    DelimitersNotSet,

    /// Another math rendering extension already claimed the math nodes.
    #[error("katex: other math package is already loaded")]
    MathRendererConflict,

    /// Failure writing the generated auto-render script.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
