//! Hook registry: sub-facets of compound properties.
//!
//! A template such as `textShadow: "Color X Y Blur"` registers one hook per
//! part (`textShadowColor`, `textShadowX`, ...). Setting a hook rewrites the
//! write into a full write of the root property whose value has only the
//! addressed slot replaced.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::normalization::color::{hex_components, COLOR_PROPERTIES};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookTemplate {
    pub root: String,
    /// Part names in slot order, e.g. `["Color", "X", "Y", "Blur"]`.
    pub parts: Vec<String>,
    /// Space-separated value used when the root is currently unset.
    pub default_value: String,
}

impl HookTemplate {
    /// Build a template from space-separated part names.
    pub fn new(root: impl Into<String>, parts: &str, default_value: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            parts: parts.split_whitespace().map(str::to_string).collect(),
            default_value: default_value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HookEntry {
    pub root: String,
    /// Slot index inside the root value.
    pub position: usize,
}

#[derive(Clone, Debug, Default)]
pub struct HookRegistry {
    hooks: HashMap<String, HookEntry>,
    templates: HashMap<String, HookTemplate>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The hook set every engine ships with: shadows, clip, positions/origins
    /// and the RGBA channels of each color property.
    pub fn standard() -> Self {
        let mut reg = Self::new();
        let templates = [
            HookTemplate::new("textShadow", "Color X Y Blur", "black 0px 0px 0px"),
            HookTemplate::new("boxShadow", "Color X Y Blur Spread", "black 0px 0px 0px 0px"),
            HookTemplate::new("clip", "Top Right Bottom Left", "0px 0px 0px 0px"),
            HookTemplate::new("backgroundPosition", "X Y", "0% 0%"),
            HookTemplate::new("transformOrigin", "X Y Z", "50% 50% 0px"),
            HookTemplate::new("perspectiveOrigin", "X Y", "50% 50%"),
        ];
        for t in templates {
            reg.insert(t);
        }
        for color in COLOR_PROPERTIES {
            reg.insert(HookTemplate::new(*color, "Red Green Blue Alpha", "255 255 255 1"));
        }
        reg
    }

    /// Register every part of `template`. A template for an existing root
    /// replaces the old one, and hooks it no longer names are dropped.
    pub fn register(&mut self, template: HookTemplate) -> Result<(), ConfigError> {
        if template.parts.is_empty() {
            return Err(ConfigError::EmptyHookTemplate {
                root: template.root,
            });
        }
        self.insert(template);
        Ok(())
    }

    fn insert(&mut self, template: HookTemplate) {
        let root = template.root.clone();
        self.hooks.retain(|_, e| e.root != root);
        for (position, part) in template.parts.iter().enumerate() {
            self.hooks.insert(
                format!("{root}{part}"),
                HookEntry {
                    root: root.clone(),
                    position,
                },
            );
        }
        self.templates.insert(root, template);
    }

    pub fn has(&self, property: &str) -> bool {
        self.hooks.contains_key(property)
    }

    pub fn root_of(&self, property: &str) -> Option<&str> {
        self.hooks.get(property).map(|e| e.root.as_str())
    }

    pub fn entry(&self, property: &str) -> Option<&HookEntry> {
        self.hooks.get(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HookEntry)> {
        self.hooks.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge `sub_value` into `root_value` at the hook's slot. Slots missing
    /// from the current root are filled from the template default first.
    pub fn inject(&self, hook: &str, sub_value: &str, root_value: &str) -> Option<String> {
        let entry = self.hooks.get(hook)?;
        let mut slots = self.slots(&entry.root, root_value);
        if slots.len() <= entry.position {
            slots.resize(entry.position + 1, "0".to_string());
        }
        slots[entry.position] = sub_value.to_string();
        Some(slots.join(" "))
    }

    /// Read the hook's slot out of `root_value`.
    pub fn extract(&self, hook: &str, root_value: &str) -> Option<String> {
        let entry = self.hooks.get(hook)?;
        self.slots(&entry.root, root_value)
            .into_iter()
            .nth(entry.position)
    }

    /// Split a root value into slots, padded to the template arity.
    fn slots(&self, root: &str, root_value: &str) -> Vec<String> {
        let defaults: Vec<&str> = self
            .templates
            .get(root)
            .map(|t| t.default_value.split_whitespace().collect())
            .unwrap_or_default();
        let is_color = COLOR_PROPERTIES.contains(&root);
        let mut slots = clean_root_value(root_value, is_color).unwrap_or_default();
        if is_color && !slots.iter().all(|s| s.parse::<f64>().is_ok()) {
            // Color hooks only tween numeric channels.
            slots.clear();
        }
        if slots.is_empty() {
            return defaults.iter().map(|s| s.to_string()).collect();
        }
        for d in defaults.iter().skip(slots.len()) {
            slots.push(d.to_string());
        }
        slots
    }
}

/// Split a root value into its space-separated slots. A functional term such
/// as `rgb(0, 0, 0)` stays one slot.
fn split_slots(value: &str) -> Vec<String> {
    let mut slots = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for c in value.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    slots.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        slots.push(current);
    }
    slots
}

/// Arguments of a value that is a single functional term (`rgb(1, 2, 3)` ->
/// `1 2 3`).
fn unwrap_function(value: &str) -> Option<String> {
    let open = value.find('(')?;
    let name = &value[..open];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) || !value.ends_with(')') {
        return None;
    }
    Some(value[open + 1..value.len() - 1].replace(',', " "))
}

/// Slots of a root value. A value that is one functional term is unwrapped,
/// and a hex color root becomes its channels. Returns `None` for CSS null
/// values, which stand for "use the template default".
fn clean_root_value(value: &str, is_color: bool) -> Option<Vec<String>> {
    let value = value.trim();
    if is_css_null(value) {
        return None;
    }
    if is_color {
        if let Some(channels) = hex_components(value) {
            return Some(channels.iter().map(|c| c.to_string()).collect());
        }
    }
    let slots = split_slots(value);
    if slots.len() == 1 {
        if let Some(inner) = unwrap_function(&slots[0]) {
            return Some(split_slots(&inner));
        }
    }
    Some(slots)
}

fn is_css_null(value: &str) -> bool {
    if value.is_empty() || value == "0" {
        return true;
    }
    if ["none", "auto", "transparent"]
        .iter()
        .any(|k| value.eq_ignore_ascii_case(k))
    {
        return true;
    }
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    compact.eq_ignore_ascii_case("rgba(0,0,0,0)")
}
