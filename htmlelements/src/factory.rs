//! Tag types resolved by name on first use.
//!
//! A [`Tag`] is the element "type" for one tag name: it fixes the name and the
//! void flag, and builds elements. [`TagFactory`] synthesizes tags on demand
//! and caches them, so no tag has to be declared up front.

use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::sync::{LazyLock, PoisonError, RwLock};

use compact_str::CompactString;
use rapidhash::RapidHasher;

use crate::content::Content;
use crate::debug;
use crate::element::{Element, ElementBuilder};
use crate::error::ConstructionError;

/// HTML void elements: no closing tag, children are discarded.
///
/// <https://developer.mozilla.org/en-US/docs/Glossary/Void_element>
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Check if a tag name is a void element (case-insensitive).
pub fn is_void_tag(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

/// Check that `name` can appear between angle brackets.
///
/// It must start with an ASCII letter and may not contain whitespace,
/// control characters, or any of `< > / " ' = &`.
pub fn validate_tag_name(name: &str) -> Result<(), ConstructionError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '<' | '>' | '/' | '"' | '\'' | '=' | '&')
        }),
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ConstructionError::InvalidTagName {
            tag: name.to_string(),
        })
    }
}

/// An element type: a tag name plus its void flag.
///
/// The name keeps the case it was requested with; built elements emit it
/// lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    name: CompactString,
    void: bool,
}

impl Tag {
    fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            void: is_void_tag(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_void(&self) -> bool {
        self.void
    }

    /// Start building an element of this type.
    pub fn builder(&self) -> ElementBuilder {
        ElementBuilder::for_tag(self)
    }

    /// Construct an element from positional children and keyword attributes.
    pub fn element<C, A, K, V>(
        &self,
        children: C,
        attributes: A,
    ) -> Result<Element, ConstructionError>
    where
        C: IntoIterator,
        C::Item: Into<Content>,
        A: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Content>,
    {
        self.builder().children(children).attrs(attributes).build()
    }

    /// An element with no children and no attributes.
    pub fn empty(&self) -> Element {
        self.builder().finish()
    }
}

type TagCache = HashMap<CompactString, Tag, BuildHasherDefault<RapidHasher>>;

/// Resolves tag names to [`Tag`]s, caching each one after its first request.
///
/// The cache is never invalidated. Concurrent first requests for the same
/// name may both construct a tag; they are identical, so either is kept.
#[derive(Debug, Default)]
pub struct TagFactory {
    cache: RwLock<TagCache>,
}

static GLOBAL: LazyLock<TagFactory> = LazyLock::new(TagFactory::new);

impl TagFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide factory used by [`crate::tags`].
    pub fn global() -> &'static TagFactory {
        &GLOBAL
    }

    /// Get the tag type for `name`, creating and caching it on first use.
    pub fn resolve(&self, name: &str) -> Result<Tag, ConstructionError> {
        if let Some(tag) = self.lookup(name) {
            return Ok(tag);
        }
        validate_tag_name(name)?;
        Ok(self.insert(name))
    }

    /// Resolve a name known to be valid at compile time.
    pub(crate) fn resolve_known(&self, name: &'static str) -> Tag {
        match self.lookup(name) {
            Some(tag) => tag,
            None => self.insert(name),
        }
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of cached tag types.
    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, name: &str) -> Option<Tag> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn insert(&self, name: &str) -> Tag {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache
            .entry(name.into())
            .or_insert_with(|| {
                let tag = Tag::new(name);
                debug!(name, void = tag.void, "created tag type");
                tag
            })
            .clone()
    }
}
