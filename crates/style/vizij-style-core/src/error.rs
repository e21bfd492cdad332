//! Error types for registry construction and property dispatch.

use thiserror::Error;

/// A host element refused a style or attribute write.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommitError {
    /// The styling engine rejected the value (legacy engines raise on e.g. negative widths).
    #[error("unsupported value [{value}] for [{property}]")]
    UnsupportedValue { property: String, value: String },
    #[error("host commit failed: {0}")]
    Host(String),
}

/// The current-value lookup could not produce a usable value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("no current value available for '{property}'")]
    Unavailable { property: String },
    #[error("host lookup failed: {0}")]
    Host(String),
}

/// Errors surfaced by a single dispatcher call.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("hook '{hook}' needs the current value of '{root}': {source}")]
    MissingRootValue {
        hook: String,
        root: String,
        #[source]
        source: LookupError,
    },
    #[error("'scroll' dispatched without a scroll request")]
    MissingScrollRequest,
    #[error(transparent)]
    Commit(#[from] CommitError),
}

/// Registry or configuration problems detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "'{property}' is a hook rooted at '{hook_root}' but normalizes to '{normalized}'"
    )]
    HookNormalizationConflict {
        property: String,
        hook_root: String,
        normalized: String,
    },
    #[error("hook template for '{root}' has no parts")]
    EmptyHookTemplate { root: String },
    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
}
