//! Registration interface of the host documentation framework.
//!
//! The extension never reaches into the host directly; it is handed a
//! mutable [`ExtensionHost`] and calls its registration methods. Real
//! hosts implement the trait over their plugin machinery, tests use
//! [`RecordingHost`], which records every call in order.

use crate::config::KatexConfig;
use crate::error::ExtensionError;
use crate::visit::{DisplayMathVisitor, InlineMathVisitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// How the host must react when a config value changes between builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RebuildScope {
    /// The whole build environment must be rebuilt.
    Environment,
    /// Regenerating the HTML output is enough.
    Html,
}

/// Declaration of one host-managed configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigValue {
    pub name: String,
    pub default: Value,
    pub rebuild: RebuildScope,
}

impl ConfigValue {
    pub fn new(name: &str, default: Value, rebuild: RebuildScope) -> Self {
        Self {
            name: name.to_string(),
            default,
            rebuild,
        }
    }
}

/// Hook invoked once the host has instantiated its builder.
pub type BuilderInitedHook =
    fn(&mut dyn ExtensionHost, &KatexConfig) -> Result<(), ExtensionError>;

/// Hook invoked after the build pass completes, successfully or not.
pub type BuildFinishedHook = fn(&BuildOutcome, &KatexConfig) -> Result<(), ExtensionError>;

/// Summary of a finished build pass, handed to build-finished hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOutcome {
    /// Name of the active builder, e.g. "html" or "latex".
    pub builder: String,
    /// Root of the builder's output tree.
    pub outdir: PathBuf,
    /// Build-wide error, if the pass failed.
    pub error: Option<String>,
}

impl BuildOutcome {
    /// Outcome of a successful HTML build into `outdir`.
    pub fn html(outdir: impl Into<PathBuf>) -> Self {
        Self {
            builder: "html".to_string(),
            outdir: outdir.into(),
            error: None,
        }
    }
}

/// Refusals signalled by the host during registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// A math renderer has already claimed the math node types.
    #[error("math node visitors already registered")]
    VisitorsAlreadyRegistered,
}

/// The subset of the host framework's extension API this crate uses.
pub trait ExtensionHost {
    /// Adds a stylesheet reference to every generated HTML page.
    fn add_stylesheet(&mut self, path: &str);

    /// Adds a script reference to every generated HTML page.
    fn add_script(&mut self, path: &str);

    /// Declares a configuration value with its default and rebuild
    /// scope.
    fn add_config_value(&mut self, value: ConfigValue);

    /// Claims rendering of the inline and display math node types.
    ///
    /// # Errors
    ///
    /// Hosts refuse a second claim with
    /// [`HostError::VisitorsAlreadyRegistered`].
    fn register_math_visitors(
        &mut self,
        inline: InlineMathVisitor,
        display: DisplayMathVisitor,
    ) -> Result<(), HostError>;

    /// Subscribes to the builder-inited event.
    fn connect_builder_inited(&mut self, hook: BuilderInitedHook);

    /// Subscribes to the build-finished event.
    fn connect_build_finished(&mut self, hook: BuildFinishedHook);
}

/// In-memory host double recording every registration in call order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
    pub config_values: Vec<ConfigValue>,
    pub builder_inited_hooks: Vec<BuilderInitedHook>,
    pub build_finished_hooks: Vec<BuildFinishedHook>,
    visitors: Option<(InlineMathVisitor, DisplayMathVisitor)>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a math renderer claimed the node types.
    pub fn has_math_visitors(&self) -> bool {
        self.visitors.is_some()
    }

    /// The registered visitor pair, if any.
    pub fn math_visitors(&self) -> Option<(InlineMathVisitor, DisplayMathVisitor)> {
        self.visitors
    }
}

impl ExtensionHost for RecordingHost {
    fn add_stylesheet(&mut self, path: &str) {
        self.stylesheets.push(path.to_string());
    }

    fn add_script(&mut self, path: &str) {
        self.scripts.push(path.to_string());
    }

    fn add_config_value(&mut self, value: ConfigValue) {
        self.config_values.push(value);
    }

    fn register_math_visitors(
        &mut self,
        inline: InlineMathVisitor,
        display: DisplayMathVisitor,
    ) -> Result<(), HostError> {
        if self.visitors.is_some() {
            return Err(HostError::VisitorsAlreadyRegistered);
        }
        self.visitors = Some((inline, display));
        Ok(())
    }

    fn connect_builder_inited(&mut self, hook: BuilderInitedHook) {
        self.builder_inited_hooks.push(hook);
    }

    fn connect_build_finished(&mut self, hook: BuildFinishedHook) {
        self.build_finished_hooks.push(hook);
    }
}
