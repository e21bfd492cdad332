//! Scroll routing. Scrolling is animated like any other property so it goes
//! through the same queue; the dispatcher short-circuits it here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CommitError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Left,
    Top,
}

/// The browser window (or any top-level scrollable surface).
pub trait Viewport {
    fn scroll_to(&mut self, x: f64, y: f64);
}

/// A scrollable element that takes a single-axis offset (`scrollLeft`/`scrollTop`).
pub trait ScrollContainer {
    fn set_scroll_offset(
        &mut self,
        direction: ScrollDirection,
        offset: f64,
    ) -> Result<(), CommitError>;
}

pub enum ScrollTarget<'a> {
    Window(&'a mut dyn Viewport),
    Container(&'a mut dyn ScrollContainer),
}

impl fmt::Debug for ScrollTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollTarget::Window(_) => f.write_str("Window"),
            ScrollTarget::Container(_) => f.write_str("Container"),
        }
    }
}

/// Per-call scroll parameters. `alternate_value` is the offset kept on the
/// cross axis when scrolling the window.
#[derive(Debug)]
pub struct ScrollRequest<'a> {
    pub target: ScrollTarget<'a>,
    pub direction: ScrollDirection,
    pub alternate_value: f64,
}

impl<'a> ScrollRequest<'a> {
    pub fn window(viewport: &'a mut dyn Viewport, direction: ScrollDirection, alternate_value: f64) -> Self {
        Self {
            target: ScrollTarget::Window(viewport),
            direction,
            alternate_value,
        }
    }

    pub fn container(container: &'a mut dyn ScrollContainer, direction: ScrollDirection) -> Self {
        Self {
            target: ScrollTarget::Container(container),
            direction,
            alternate_value: 0.0,
        }
    }

    /// Perform the scroll for `offset` along `direction`.
    pub(crate) fn perform(self, offset: f64) -> Result<(), CommitError> {
        match self.target {
            ScrollTarget::Container(c) => c.set_scroll_offset(self.direction, offset),
            ScrollTarget::Window(w) => {
                match self.direction {
                    ScrollDirection::Left => w.scroll_to(offset, self.alternate_value),
                    ScrollDirection::Top => w.scroll_to(self.alternate_value, offset),
                }
                Ok(())
            }
        }
    }
}
