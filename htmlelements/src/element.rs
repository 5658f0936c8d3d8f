//! The element tree node and its construction surface.

use std::sync::Arc;

use compact_str::CompactString;
use indexmap::IndexMap;

use crate::codec::{AttributeCodec, AttributeName, VOID_KEY, validate_attribute_name};
use crate::content::Content;
use crate::error::ConstructionError;
use crate::factory::{Tag, validate_tag_name};
use crate::trace;

/// An HTML element: tag, ordered attributes, ordered children and a void flag.
///
/// Built once through an [`ElementBuilder`] and not mutated afterwards.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) tag: CompactString,
    pub(crate) attrs: IndexMap<CompactString, Content>,
    pub(crate) children: Vec<Content>,
    pub(crate) void: bool,
}

impl Element {
    /// Start building an element of the undifferentiated base type.
    ///
    /// Unlike factory-resolved tags, the base type accepts the `_void`
    /// control key (or [`ElementBuilder::void`]) to pick its void flag.
    pub fn base(name: &str) -> Result<ElementBuilder, ConstructionError> {
        validate_tag_name(name)?;
        Ok(ElementBuilder::new(name.into(), false, false))
    }

    /// Lower-cased tag name, as emitted.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_void(&self) -> bool {
        self.void
    }

    /// Attributes under their output names, in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Content)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get_attr(&self, name: &str) -> Option<&Content> {
        self.attrs.get(name)
    }

    /// Children in order. Always empty for void elements.
    pub fn children(&self) -> &[Content] {
        &self.children
    }
}

/// Collects children and attributes for one [`Element`].
///
/// Construction errors are remembered and reported by [`build`](Self::build),
/// so calls can be chained freely.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag: CompactString,
    void: bool,
    void_fixed: bool,
    void_set: bool,
    codec: Arc<AttributeCodec>,
    attrs: IndexMap<CompactString, Content>,
    children: Vec<Content>,
    error: Option<ConstructionError>,
}

impl ElementBuilder {
    pub(crate) fn new(tag: CompactString, void: bool, void_fixed: bool) -> Self {
        Self {
            tag,
            void,
            void_fixed,
            void_set: false,
            codec: AttributeCodec::shared_default(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            error: None,
        }
    }

    pub(crate) fn for_tag(tag: &Tag) -> Self {
        Self::new(tag.name().into(), tag.is_void(), true)
    }

    /// Use a different alias table for the attributes added after this call.
    pub fn codec(mut self, codec: Arc<AttributeCodec>) -> Self {
        self.codec = codec;
        self
    }

    /// Set the void flag. Only valid on the base element type.
    pub fn void(mut self, void: bool) -> Self {
        self.set_void(VOID_KEY, Content::Bool(void));
        self
    }

    pub fn child(mut self, child: impl Into<Content>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Add an attribute, mapping its key through the codec.
    pub fn attr(mut self, key: &str, value: impl Into<Content>) -> Self {
        match self.codec.map_name(key) {
            AttributeName::VoidMarker => self.set_void(key, value.into()),
            AttributeName::Attribute(name) => self.insert_attr(name, value.into()),
        }
        self
    }

    pub fn attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Content>,
    {
        for (k, v) in attrs {
            self = self.attr(k.as_ref(), v);
        }
        self
    }

    /// Add an attribute under exactly the given name, bypassing the codec.
    pub fn raw_attr(mut self, name: &str, value: impl Into<Content>) -> Self {
        self.insert_attr(name.into(), value.into());
        self
    }

    pub fn raw_attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Content>,
    {
        for (k, v) in attrs {
            self.insert_attr(k.as_ref().into(), v.into());
        }
        self
    }

    fn insert_attr(&mut self, name: CompactString, value: Content) {
        if let Err(err) = validate_attribute_name(&name) {
            self.error.get_or_insert(err);
            return;
        }
        self.attrs.insert(name, value);
    }

    fn set_void(&mut self, key: &str, value: Content) {
        if self.error.is_some() {
            return;
        }
        let err = if self.void_fixed {
            Some(ConstructionError::ReservedKeyword {
                key: key.to_string(),
            })
        } else if self.void_set {
            Some(ConstructionError::ConflictingVoidMarker)
        } else {
            match value.as_bool() {
                Some(void) => {
                    self.void = void;
                    self.void_set = true;
                    None
                }
                None => Some(ConstructionError::InvalidVoidMarker {
                    key: key.to_string(),
                }),
            }
        };
        self.error = err;
    }

    pub fn build(mut self) -> Result<Element, ConstructionError> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(self.finish()),
        }
    }

    /// Assemble the element; callers have already checked for errors.
    pub(crate) fn finish(self) -> Element {
        let children = if self.void {
            if !self.children.is_empty() {
                trace!(
                    tag = %self.tag,
                    count = self.children.len(),
                    "discarding children of void element"
                );
            }
            Vec::new()
        } else {
            self.children
        };
        Element {
            tag: self.tag.to_ascii_lowercase().into(),
            attrs: self.attrs,
            children,
            void: self.void,
        }
    }
}
