//! Attribute name mapping and value serialization.
//!
//! Keys supplied through [`ElementBuilder::attr`](crate::ElementBuilder::attr)
//! go through an [`AttributeCodec`] once, at construction:
//! - the `_void` control key sets the void flag and is never emitted
//! - `classes` becomes `class`, `label_for` becomes `for`
//! - every other key passes through unchanged (unless underscore
//!   dasherizing is switched on)

use std::sync::{Arc, LazyLock};

use compact_str::CompactString;
use indexmap::IndexMap;

use crate::error::ConstructionError;

/// Control key that selects the void flag on the base element type.
pub const VOID_KEY: &str = "_void";

/// Result of mapping one construction-time key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeName {
    /// The void-flag control key.
    VoidMarker,
    /// A real attribute, under its output name.
    Attribute(CompactString),
}

/// Alias table translating construction-time keys into HTML attribute names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeCodec {
    aliases: IndexMap<CompactString, CompactString>,
    dasherize_underscores: bool,
}

static DEFAULT_CODEC: LazyLock<Arc<AttributeCodec>> =
    LazyLock::new(|| Arc::new(AttributeCodec::default()));

impl Default for AttributeCodec {
    fn default() -> Self {
        Self::without_aliases()
            .with_alias("classes", "class")
            .with_alias("label_for", "for")
    }
}

impl AttributeCodec {
    /// The default table: `classes → class`, `label_for → for`.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty table; every key passes through unchanged.
    pub fn without_aliases() -> Self {
        Self {
            aliases: IndexMap::new(),
            dasherize_underscores: false,
        }
    }

    /// Shared handle to the default table.
    pub fn shared_default() -> Arc<AttributeCodec> {
        Arc::clone(&DEFAULT_CODEC)
    }

    /// Add or replace an alias.
    pub fn with_alias(mut self, from: &str, to: &str) -> Self {
        self.aliases.insert(from.into(), to.into());
        self
    }

    /// Map `_` to `-` in keys without an alias (`hx_get` becomes `hx-get`).
    pub fn dasherize_underscores(mut self, enabled: bool) -> Self {
        self.dasherize_underscores = enabled;
        self
    }

    /// Look up the output name for `key`, if it is aliased.
    pub fn alias(&self, key: &str) -> Option<&str> {
        self.aliases.get(key).map(|v| v.as_str())
    }

    /// Map a construction-time key to its output form.
    pub fn map_name(&self, key: &str) -> AttributeName {
        if key == VOID_KEY {
            return AttributeName::VoidMarker;
        }
        if let Some(to) = self.aliases.get(key) {
            return AttributeName::Attribute(to.clone());
        }
        if self.dasherize_underscores && key.contains('_') {
            return AttributeName::Attribute(key.replace('_', "-").into());
        }
        AttributeName::Attribute(key.into())
    }
}

/// Check that `name` can be emitted as an attribute name.
///
/// It must be non-empty and may not contain whitespace, control characters,
/// or any of `< > / " ' =`.
pub fn validate_attribute_name(name: &str) -> Result<(), ConstructionError> {
    let valid = !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '<' | '>' | '/' | '"' | '\'' | '=')
        });
    if valid {
        Ok(())
    } else {
        Err(ConstructionError::InvalidAttributeName {
            name: name.to_string(),
        })
    }
}

/// Escape `text` for use inside a double-quoted attribute value.
pub fn escape_attribute(text: &str, out: &mut String) {
    escape_into(text, out);
}

/// Escape `text` for use as element content.
pub fn escape_text(text: &str, out: &mut String) {
    escape_into(text, out);
}

/// Both contexts escape the same set: `&`, `<`, `>`, `"` and `'`.
fn escape_into(text: &str, out: &mut String) {
    let mut last = 0;
    for (i, c) in text.char_indices() {
        let replacement = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#x27;",
            _ => continue,
        };
        out.push_str(&text[last..i]);
        out.push_str(replacement);
        last = i + c.len_utf8();
    }
    out.push_str(&text[last..]);
}

/// Convenience wrapper returning a new string.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}
