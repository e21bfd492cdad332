//! Vizij Style Core (engine-agnostic)
//!
//! Property resolution and dispatch for animated style writes. Given a logical
//! property name and a target value, the [`Dispatcher`] decides which mechanism
//! carries it (scroll offset, style assignment, SVG attribute, transform cache,
//! or a hook merged into a compound root), normalizes name and value, and
//! performs exactly one write on the host element.
//!
//! Registries are built once per engine ([`StyleRegistry::standard`]) and
//! shared by reference. Per-element state lives in [`ElementData`], owned by
//! the caller.

pub mod config;
pub mod dispatch;
pub mod element;
pub mod error;
pub mod flush;
pub mod hooks;
pub mod normalization;
pub mod prefix;
pub mod registry;
pub mod scroll;
pub mod svg;
pub mod transform_cache;
pub mod value;

// Re-exports for consumers (adapters)
pub use config::{CommitPolicy, Config, DebugLevel, EngineProfile};
pub use dispatch::{set_property_value, Dispatcher, ResolvedWrite, WriteChannel, WriteRequest};
pub use element::{ElementData, StyleElement};
pub use error::{CommitError, ConfigError, DispatchError, LookupError};
pub use flush::flush_transform_cache;
pub use hooks::{HookRegistry, HookTemplate};
pub use normalization::{Normalization, NormalizationRegistry};
pub use prefix::{StaticSupport, StyleSupport, Unprefixed, VendorPrefixResolver};
pub use registry::{StyleRegistry, StyleRegistryBuilder};
pub use scroll::{ScrollContainer, ScrollDirection, ScrollRequest, ScrollTarget, Viewport};
pub use svg::{DefaultSvgAttributes, SvgAttributes};
pub use transform_cache::TransformCache;
pub use value::StyleValue;
