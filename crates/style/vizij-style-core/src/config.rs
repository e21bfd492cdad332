//! Startup configuration: engine capabilities and diagnostics.
//!
//! Everything here is read once when the registries are built. The dispatcher
//! never branches on engine versions per call; it consults the
//! [`CommitPolicy`] derived from the profile instead.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::hooks::HookTemplate;

/// Capabilities of the styling engine the dispatcher writes into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineProfile {
    /// The engine raises on style values it considers invalid (e.g. a negative width).
    pub legacy_style_errors: bool,
    /// Register translateZ/scaleZ/rotateX/rotateY/transformPerspective.
    pub supports_3d_transforms: bool,
    /// SVG `transform` must be written as an attribute instead of a style.
    pub svg_transform_attribute: bool,
    /// Opacity is expressed through `filter: alpha(opacity=..)`.
    pub legacy_opacity_filter: bool,
}

impl EngineProfile {
    pub fn modern() -> Self {
        Self {
            legacy_style_errors: false,
            supports_3d_transforms: true,
            svg_transform_attribute: false,
            legacy_opacity_filter: false,
        }
    }

    pub fn legacy() -> Self {
        Self {
            legacy_style_errors: true,
            supports_3d_transforms: false,
            svg_transform_attribute: false,
            legacy_opacity_filter: true,
        }
    }

    pub fn commit_policy(&self) -> CommitPolicy {
        if self.legacy_style_errors {
            CommitPolicy::Recoverable
        } else {
            CommitPolicy::FailFast
        }
    }
}

impl Default for EngineProfile {
    fn default() -> Self {
        Self::modern()
    }
}

/// How a style commit treats a host failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommitPolicy {
    /// Host failures propagate to the caller of that single write.
    FailFast,
    /// Style writes are guarded; failures are reported and discarded.
    Recoverable,
}

/// Verbosity of the diagnostic channel (the `log` facade).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugLevel {
    #[default]
    Off,
    /// Report swallowed commits.
    Errors,
    /// Also trace every committed write.
    Trace,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineProfile,
    pub debug: DebugLevel,
    /// Hook templates registered on top of the standard set.
    pub extra_hooks: Vec<HookTemplate>,
}

impl Config {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_engine(mut self, engine: EngineProfile) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_debug(mut self, debug: DebugLevel) -> Self {
        self.debug = debug;
        self
    }
}
