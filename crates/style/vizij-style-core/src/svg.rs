//! Which concrete properties an SVG element takes as attributes.

use crate::config::EngineProfile;

const DIMENSIONAL: &[&str] = &[
    "width", "height", "x", "y", "cx", "cy", "r", "rx", "ry", "x1", "x2", "y1", "y2",
];

pub trait SvgAttributes {
    fn is_svg_attribute(&self, name: &str) -> bool;
}

/// Dimensional attributes, plus `transform` on engines that ignore CSS
/// transforms on SVG.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSvgAttributes {
    pub include_transform: bool,
}

impl DefaultSvgAttributes {
    pub fn for_engine(engine: &EngineProfile) -> Self {
        Self {
            include_transform: engine.svg_transform_attribute,
        }
    }
}

impl SvgAttributes for DefaultSvgAttributes {
    fn is_svg_attribute(&self, name: &str) -> bool {
        DIMENSIONAL.iter().any(|a| a.eq_ignore_ascii_case(name))
            || (self.include_transform && name.eq_ignore_ascii_case("transform"))
    }
}
