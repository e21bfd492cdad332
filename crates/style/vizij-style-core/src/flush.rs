//! Commit the accumulated transform cache as one `transform` write.

use crate::dispatch::{Dispatcher, ResolvedWrite, WriteRequest};
use crate::element::{ElementData, StyleElement};
use crate::error::DispatchError;
use crate::normalization::TRANSFORM;

/// Compose the element's transform cache and dispatch it as the plain
/// `transform` property, so prefixing and SVG routing apply as usual. The
/// cache is left intact; returns `Ok(None)` when it is empty.
pub fn flush_transform_cache<E>(
    dispatcher: &Dispatcher<'_>,
    element: &mut E,
    data: &mut ElementData,
) -> Result<Option<ResolvedWrite>, DispatchError>
where
    E: StyleElement + ?Sized,
{
    if data.transform_cache.is_empty() {
        return Ok(None);
    }
    let svg_syntax = data.is_svg
        && dispatcher.config().engine.svg_transform_attribute
        && dispatcher
            .registry()
            .svg_attributes()
            .is_svg_attribute(TRANSFORM);
    let composed = if svg_syntax {
        data.transform_cache.compose_svg()
    } else {
        data.transform_cache.compose_css()
    };
    dispatcher
        .apply(element, data, WriteRequest::new(TRANSFORM, composed))
        .map(Some)
}
