//! Values that can appear as element children or attribute values.
//!
//! [`Content`] is a tagged variant, so the renderer decides between escaping
//! and verbatim output with a plain `match`:
//! - [`Content::Text`] is escaped on output
//! - [`Content::Safe`] is spliced in verbatim
//! - [`Content::Element`] renders its own markup, never re-escaped by its parent
//! - [`Content::Bool`] renders as `true` / `false`
//! - [`Content::Lazy`] is a zero-argument callable resolved at render time

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::element::Element;
use crate::error::RenderError;

/// A string that is already escaped (or trusted) HTML.
///
/// Rendered exactly as given, both as child content and as an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SafeString(String);

impl SafeString {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shorthand for [`SafeString::new`].
pub fn safe(html: impl Into<String>) -> SafeString {
    SafeString::new(html)
}

/// A deferred value, invoked every time the owning tree is rendered.
#[derive(Clone)]
pub struct Lazy(Arc<dyn Fn() -> Result<Content, RenderError> + Send + Sync>);

impl Lazy {
    pub(crate) fn call(&self) -> Result<Content, RenderError> {
        (self.0)()
    }
}

impl fmt::Debug for Lazy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Lazy(..)")
    }
}

/// A child or attribute value.
#[derive(Debug, Clone)]
pub enum Content {
    Element(Element),
    Text(String),
    Safe(SafeString),
    Bool(bool),
    Lazy(Lazy),
}

impl Content {
    /// Plain text, escaped on output.
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    /// Any value with a textual representation, escaped on output.
    pub fn display(value: impl fmt::Display) -> Self {
        Content::Text(value.to_string())
    }

    /// A zero-argument callable whose result is rendered in place of this value.
    ///
    /// The callable may itself return another callable; see
    /// [`RenderOptions::max_callable_depth`](crate::RenderOptions::max_callable_depth).
    pub fn lazy<F, C>(f: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
        C: Into<Content>,
    {
        Content::Lazy(Lazy(Arc::new(move || Ok(f().into()))))
    }

    /// Like [`Content::lazy`], for callables that can fail.
    ///
    /// An `Err` aborts the render with [`RenderError::Callable`].
    pub fn try_lazy<F, C, E>(f: F) -> Self
    where
        F: Fn() -> Result<C, E> + Send + Sync + 'static,
        C: Into<Content>,
        E: fmt::Display,
    {
        Content::Lazy(Lazy(Arc::new(move || {
            f().map(Into::into).map_err(|e| RenderError::Callable {
                message: e.to_string(),
            })
        })))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Content::Element(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Content::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Content::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<Element> for Content {
    fn from(e: Element) -> Self {
        Content::Element(e)
    }
}

impl From<SafeString> for Content {
    fn from(s: SafeString) -> Self {
        Content::Safe(s)
    }
}

impl From<bool> for Content {
    fn from(b: bool) -> Self {
        Content::Bool(b)
    }
}

impl From<Lazy> for Content {
    fn from(l: Lazy) -> Self {
        Content::Lazy(l)
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_owned())
    }
}

impl From<&String> for Content {
    fn from(s: &String) -> Self {
        Content::Text(s.clone())
    }
}

impl From<Cow<'_, str>> for Content {
    fn from(s: Cow<'_, str>) -> Self {
        Content::Text(s.into_owned())
    }
}

impl From<char> for Content {
    fn from(c: char) -> Self {
        Content::Text(c.to_string())
    }
}

macro_rules! content_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Content {
                fn from(value: $ty) -> Self {
                    Content::Text(value.to_string())
                }
            }
        )*
    };
}

content_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_become_text() {
        assert!(matches!(Content::from(42), Content::Text(ref t) if t == "42"));
        assert!(matches!(Content::from(1.5), Content::Text(ref t) if t == "1.5"));
    }

    #[test]
    fn test_element_accessors() {
        let el = Element::base("p").unwrap().child("x").build().unwrap();
        let content = Content::from(el);
        assert!(content.is_element());
        assert_eq!(content.as_element().map(Element::tag), Some("p"));
        assert!(!Content::from("p").is_element());
        assert!(Content::from(true).as_element().is_none());
    }

    #[test]
    fn test_bool_stays_bool() {
        assert_eq!(Content::from(true).as_bool(), Some(true));
        assert_eq!(Content::from("true").as_bool(), None);
    }

    #[test]
    fn test_try_lazy_maps_error() {
        let c = Content::try_lazy(|| Err::<&str, _>("boom"));
        let Content::Lazy(lazy) = c else {
            panic!("expected lazy");
        };
        assert_eq!(
            lazy.call().unwrap_err(),
            RenderError::Callable {
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_safe_string_roundtrip() {
        let s = safe("<b>x</b>");
        assert_eq!(s.as_str(), "<b>x</b>");
        assert_eq!(s.to_string(), "<b>x</b>");
    }
}
