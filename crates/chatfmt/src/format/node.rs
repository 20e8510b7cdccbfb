//! Conversion between [`Format`] and a generic document node.
//!
//! Each category maps to a sub-node holding an optional `color` name and the
//! optional toggles `bold`, `italic`, `underline`, `obfuscated` and
//! `strikethrough`:
//!
//! ```yaml
//! info:
//!   color: white
//! subdued:
//!   color: yellow
//!   italic: true
//! stress:
//!   color: dark_aqua
//! ```
//!
//! Only fields a style actually sets are written. Reading is lenient: a missing
//! category reads as the empty style (not the builder default), an unknown
//! color name is skipped, and a toggle that is not a boolean stays unset.

use serde_yaml::{Mapping, Value};

use super::{Category, Format};
use crate::style::{BuiltinColors, ColorRegistry, StyleSpec, TextStyle};

const COLOR: &str = "color";

impl Format {
    /// Serializes this format to a document node.
    pub fn to_node(&self) -> Value {
        let mut root = Mapping::new();
        for category in Category::ALL {
            if let Some(node) = spec_to_node(self.spec(category)) {
                root.insert(Value::String(category.key().to_string()), node);
            }
        }
        Value::Mapping(root)
    }

    /// Reads a format from a document node, resolving color names with the
    /// built-in chat colors.
    pub fn from_node(node: &Value) -> Format {
        Self::from_node_with(node, &BuiltinColors)
    }

    /// Reads a format from a document node, resolving names through `registry`.
    pub fn from_node_with(node: &Value, registry: &dyn ColorRegistry) -> Format {
        Category::ALL
            .iter()
            .fold(Format::builder(), |builder, category| {
                let spec = spec_from_node(node.get(category.key()), registry);
                builder.category(*category, spec)
            })
            .build()
    }
}

fn spec_to_node(spec: &StyleSpec) -> Option<Value> {
    if spec.is_empty() {
        return None;
    }

    let mut node = Mapping::new();
    if let Some(color) = spec.color {
        node.insert(
            Value::String(COLOR.to_string()),
            Value::String(color.name().to_string()),
        );
    }
    for style in TextStyle::ALL {
        if let Some(on) = spec.get(style) {
            node.insert(Value::String(style.name().to_string()), Value::Bool(on));
        }
    }
    Some(Value::Mapping(node))
}

fn spec_from_node(node: Option<&Value>, registry: &dyn ColorRegistry) -> StyleSpec {
    let node = match node {
        Some(node) if node.is_mapping() => node,
        Some(other) => {
            tracing::debug!(?other, "category is not a mapping; using empty style");
            return StyleSpec::NONE;
        }
        None => return StyleSpec::NONE,
    };

    let mut spec = StyleSpec::new();

    if let Some(name) = node.get(COLOR).and_then(Value::as_str) {
        match registry.color(name) {
            Some(color) => spec.color = Some(color),
            None => tracing::trace!(name, "ignoring unknown color"),
        }
    }

    for style in TextStyle::ALL {
        if let Some(on) = node.get(style.name()).and_then(Value::as_bool) {
            spec = spec.with(style, on);
        }
    }

    spec
}
