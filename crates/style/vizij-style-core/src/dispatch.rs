//! Dispatcher: the single funnel every animated property passes through.
//!
//! Resolution order for one write:
//! 1. `scroll` goes to the window or a container and stops there.
//! 2. A normalization resolving to `transform` only updates the transform cache.
//! 3. A hook is merged into its root's current value and the write retargets the root.
//! 4. The (possibly retargeted) property is normalized.
//! 5. The concrete name gets its vendor prefix.
//! 6. Exactly one commit: SVG attribute or style assignment.

use std::borrow::Cow;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::{CommitPolicy, Config, DebugLevel};
use crate::element::{ElementData, StyleElement};
use crate::error::{CommitError, DispatchError};
use crate::normalization::TRANSFORM;
use crate::registry::StyleRegistry;
use crate::scroll::ScrollRequest;
use crate::value::StyleValue;

/// Where a dispatched write ended up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteChannel {
    Scroll,
    Style,
    Attribute,
    TransformCache,
    /// A guarded style write failed and was dropped.
    Discarded,
}

/// The name/value pair actually committed, after hooks, normalization and
/// prefixing. For transform sub-properties this is `transform` and the
/// cached term, not the sub-property that was requested.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedWrite {
    pub property: String,
    pub value: StyleValue,
    pub channel: WriteChannel,
}

#[derive(Debug)]
pub struct WriteRequest<'a> {
    pub property: &'a str,
    pub value: StyleValue,
    /// Cached value of the hook root; skips the current-value lookup when present.
    pub root_value: Option<&'a str>,
    pub scroll: Option<ScrollRequest<'a>>,
}

impl<'a> WriteRequest<'a> {
    pub fn new(property: &'a str, value: impl Into<StyleValue>) -> Self {
        Self {
            property,
            value: value.into(),
            root_value: None,
            scroll: None,
        }
    }

    pub fn with_root_value(mut self, root_value: &'a str) -> Self {
        self.root_value = Some(root_value);
        self
    }

    pub fn with_scroll(mut self, scroll: ScrollRequest<'a>) -> Self {
        self.scroll = Some(scroll);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r StyleRegistry,
    config: &'r Config,
    policy: CommitPolicy,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r StyleRegistry, config: &'r Config) -> Self {
        Self {
            registry,
            config,
            policy: config.engine.commit_policy(),
        }
    }

    pub fn registry(&self) -> &'r StyleRegistry {
        self.registry
    }

    pub fn config(&self) -> &'r Config {
        self.config
    }

    /// Resolve and commit one property write.
    ///
    /// Errors are limited to this call: a failed hook lookup, a missing scroll
    /// request, or a host failure under [`CommitPolicy::FailFast`].
    pub fn apply<E>(
        &self,
        element: &mut E,
        data: &mut ElementData,
        request: WriteRequest<'_>,
    ) -> Result<ResolvedWrite, DispatchError>
    where
        E: StyleElement + ?Sized,
    {
        let WriteRequest {
            property,
            mut value,
            root_value,
            scroll,
        } = request;

        if property == "scroll" {
            let scroll = scroll.ok_or(DispatchError::MissingScrollRequest)?;
            let result = scroll.perform(value.as_number().unwrap_or(0.0));
            let channel = if self.guard(property, &value, result)? {
                WriteChannel::Scroll
            } else {
                WriteChannel::Discarded
            };
            self.trace("scroll", "scroll", &value);
            return Ok(ResolvedWrite {
                property: property.to_string(),
                value,
                channel,
            });
        }

        let engine = &self.config.engine;
        let normalizations = self.registry.normalizations();

        if let Some(norm) = normalizations.get(property) {
            if norm.resolve_name(data, engine) == TRANSFORM {
                // The cache is flushed as one composite write later on.
                let cached = norm.inject_value(data, &value, engine);
                self.trace(property, TRANSFORM, &cached);
                return Ok(ResolvedWrite {
                    property: TRANSFORM.to_string(),
                    value: cached,
                    channel: WriteChannel::TransformCache,
                });
            }
        }

        let mut property: Cow<'_, str> = Cow::Borrowed(property);

        let hooks = self.registry.hooks();
        if let Some(root) = hooks.root_of(&property) {
            let current = match root_value {
                Some(v) => v.to_string(),
                None => element.current_value(root).map_err(|source| {
                    DispatchError::MissingRootValue {
                        hook: property.to_string(),
                        root: root.to_string(),
                        source,
                    }
                })?,
            };
            if let Some(merged) = hooks.inject(&property, &value.to_string(), &current) {
                value = StyleValue::Text(merged);
            }
            property = Cow::Owned(root.to_string());
        }

        if let Some(norm) = normalizations.get(&property) {
            value = norm.inject_value(data, &value, engine);
            property = Cow::Owned(norm.resolve_name(data, engine).into_owned());
        }

        let text = value.to_string();
        let as_attribute = self.policy == CommitPolicy::FailFast
            && data.is_svg
            && self.registry.svg_attributes().is_svg_attribute(&property);

        let (final_name, channel) = if as_attribute {
            // Attributes never take vendor prefixes.
            element.set_attribute(&property, &text)?;
            (property.to_string(), WriteChannel::Attribute)
        } else {
            let prefixed = self.registry.prefixes().resolve(&property);
            let result = element.set_style(&prefixed, &text);
            let channel = if self.guard(&prefixed, &value, result)? {
                WriteChannel::Style
            } else {
                WriteChannel::Discarded
            };
            (prefixed, channel)
        };

        self.trace(&property, &final_name, &value);
        Ok(ResolvedWrite {
            property: final_name,
            value,
            channel,
        })
    }

    /// Apply several writes to one element. Each write is independent: a
    /// failure is reported in its own slot and the rest still run.
    pub fn apply_batch<'a, E, I>(
        &self,
        element: &mut E,
        data: &mut ElementData,
        requests: I,
    ) -> Vec<Result<ResolvedWrite, DispatchError>>
    where
        E: StyleElement + ?Sized,
        I: IntoIterator<Item = WriteRequest<'a>>,
    {
        requests
            .into_iter()
            .map(|request| self.apply(element, data, request))
            .collect()
    }

    /// Apply the commit policy to one host write. `Ok(false)` means the
    /// failure was swallowed.
    fn guard(
        &self,
        name: &str,
        value: &StyleValue,
        result: Result<(), CommitError>,
    ) -> Result<bool, DispatchError> {
        match (result, self.policy) {
            (Ok(()), _) => Ok(true),
            (Err(err), CommitPolicy::FailFast) => Err(err.into()),
            (Err(err), CommitPolicy::Recoverable) => {
                if self.config.debug >= DebugLevel::Errors {
                    warn!("Browser does not support [{value}] for [{name}]: {err}");
                }
                Ok(false)
            }
        }
    }

    fn trace(&self, property: &str, concrete: &str, value: &StyleValue) {
        if self.config.debug >= DebugLevel::Trace {
            debug!("Set {property} ({concrete}): {value}");
        }
    }
}

/// One-shot form of [`Dispatcher::apply`].
pub fn set_property_value<E>(
    registry: &StyleRegistry,
    config: &Config,
    element: &mut E,
    data: &mut ElementData,
    request: WriteRequest<'_>,
) -> Result<ResolvedWrite, DispatchError>
where
    E: StyleElement + ?Sized,
{
    Dispatcher::new(registry, config).apply(element, data, request)
}
