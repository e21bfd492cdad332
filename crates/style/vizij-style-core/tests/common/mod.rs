#![allow(dead_code)]
use std::cell::Cell;
use std::collections::HashMap;

use vizij_style::{
    CommitError, LookupError, ScrollContainer, ScrollDirection, StyleElement, Viewport,
};

/// Headless element that records every write it receives.
#[derive(Debug, Default)]
pub struct RecordingElement {
    pub styles: Vec<(String, String)>,
    pub attributes: Vec<(String, String)>,
    pub current: HashMap<String, String>,
    pub lookups: Cell<usize>,
    /// Style names whose assignment raises, like a legacy engine refusing a value.
    pub rejects: Vec<String>,
}

impl RecordingElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_current(mut self, property: &str, value: &str) -> Self {
        self.current.insert(property.to_string(), value.to_string());
        self
    }

    pub fn rejecting(mut self, name: &str) -> Self {
        self.rejects.push(name.to_string());
        self
    }

    pub fn last_style(&self) -> Option<(&str, &str)> {
        self.styles.last().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn writes(&self) -> usize {
        self.styles.len() + self.attributes.len()
    }
}

impl StyleElement for RecordingElement {
    fn set_style(&mut self, name: &str, value: &str) -> Result<(), CommitError> {
        if self.rejects.iter().any(|r| r == name) {
            return Err(CommitError::UnsupportedValue {
                property: name.to_string(),
                value: value.to_string(),
            });
        }
        self.styles.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), CommitError> {
        self.attributes.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn current_value(&self, property: &str) -> Result<String, LookupError> {
        self.lookups.set(self.lookups.get() + 1);
        self.current
            .get(property)
            .cloned()
            .ok_or_else(|| LookupError::Unavailable {
                property: property.to_string(),
            })
    }
}

#[derive(Debug, Default)]
pub struct RecordingViewport {
    pub calls: Vec<(f64, f64)>,
}

impl Viewport for RecordingViewport {
    fn scroll_to(&mut self, x: f64, y: f64) {
        self.calls.push((x, y));
    }
}

#[derive(Debug, Default)]
pub struct RecordingContainer {
    pub calls: Vec<(ScrollDirection, f64)>,
    /// Reject every offset, like a detached element.
    pub fails: bool,
}

impl RecordingContainer {
    pub fn failing() -> Self {
        Self {
            fails: true,
            ..Self::default()
        }
    }
}

impl ScrollContainer for RecordingContainer {
    fn set_scroll_offset(
        &mut self,
        direction: ScrollDirection,
        offset: f64,
    ) -> Result<(), CommitError> {
        if self.fails {
            return Err(CommitError::Host("scroll offset rejected".into()));
        }
        self.calls.push((direction, offset));
        Ok(())
    }
}
