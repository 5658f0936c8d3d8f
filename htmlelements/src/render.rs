//! Rendering element trees to HTML strings.
//!
//! Escaping happens inline, as each leaf value is turned into text, so
//! nested elements and [`SafeString`](crate::SafeString)s are never escaped
//! twice. Output is built in a private buffer and only returned once the
//! whole tree rendered; an error never yields partial output.

use crate::codec::{escape_attribute, escape_text};
use crate::content::{Content, Lazy};
use crate::element::Element;
use crate::error::RenderError;
use crate::trace;

/// Options for rendering.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// How many callables may return callables in a row before rendering
    /// gives up (default: 64). The count starts over once a callable
    /// resolves to anything else, such as an element.
    pub max_callable_depth: usize,
    /// How deeply elements may nest, counting elements produced by
    /// callables (default: 1024). Catches a callable that returns an element
    /// containing that same callable.
    pub max_element_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_callable_depth: 64,
            max_element_depth: 1024,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callable chain limit.
    pub fn max_callable_depth(mut self, depth: usize) -> Self {
        self.max_callable_depth = depth;
        self
    }

    /// Set the element nesting limit.
    pub fn max_element_depth(mut self, depth: usize) -> Self {
        self.max_element_depth = depth;
        self
    }
}

/// Render any content value to HTML with default options.
pub fn render(value: &Content) -> Result<String, RenderError> {
    render_with_options(value, &RenderOptions::default())
}

/// Render any content value to HTML.
pub fn render_with_options(value: &Content, opts: &RenderOptions) -> Result<String, RenderError> {
    let mut out = String::new();
    Renderer::new(&mut out, opts).write_content(value, 0)?;
    trace!(len = out.len(), "rendered");
    Ok(out)
}

/// Render an element and its subtree with default options.
pub fn render_element(elem: &Element) -> Result<String, RenderError> {
    let mut out = String::new();
    Renderer::new(&mut out, &RenderOptions::default()).write_element(elem, 0)?;
    Ok(out)
}

struct Renderer<'a> {
    out: &'a mut String,
    options: &'a RenderOptions,
}

impl<'a> Renderer<'a> {
    fn new(out: &'a mut String, options: &'a RenderOptions) -> Self {
        Self { out, options }
    }

    /// Resolve a callable, and any callables it returns in turn, to a
    /// non-callable value.
    fn resolve(&self, lazy: &Lazy) -> Result<Content, RenderError> {
        let limit = self.options.max_callable_depth;
        let mut chain = 0;
        let mut current = lazy.clone();
        loop {
            if chain >= limit {
                return Err(RenderError::CallableDepthExceeded { limit });
            }
            trace!(chain, "invoking callable");
            match current.call()? {
                Content::Lazy(next) => {
                    current = next;
                    chain += 1;
                }
                value => return Ok(value),
            }
        }
    }

    fn write_content(&mut self, value: &Content, nesting: usize) -> Result<(), RenderError> {
        match value {
            Content::Element(elem) => self.write_element(elem, nesting)?,
            Content::Safe(html) => self.out.push_str(html.as_str()),
            Content::Bool(b) => self.out.push_str(bool_str(*b)),
            Content::Text(text) => escape_text(text, self.out),
            Content::Lazy(lazy) => {
                let resolved = self.resolve(lazy)?;
                self.write_content(&resolved, nesting)?;
            }
        }
        Ok(())
    }

    fn write_element(&mut self, elem: &Element, nesting: usize) -> Result<(), RenderError> {
        let limit = self.options.max_element_depth;
        if nesting >= limit {
            return Err(RenderError::ElementDepthExceeded { limit });
        }

        self.out.push('<');
        self.out.push_str(&elem.tag);
        for (name, value) in &elem.attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.write_attr_value(value, nesting)?;
            self.out.push('"');
        }
        self.out.push('>');

        if elem.void {
            return Ok(());
        }

        for child in &elem.children {
            self.write_content(child, nesting + 1)?;
        }
        self.out.push_str("</");
        self.out.push_str(&elem.tag);
        self.out.push('>');
        Ok(())
    }

    fn write_attr_value(&mut self, value: &Content, nesting: usize) -> Result<(), RenderError> {
        match value {
            Content::Safe(html) => self.out.push_str(html.as_str()),
            Content::Bool(b) => self.out.push_str(bool_str(*b)),
            Content::Text(text) => escape_attribute(text, self.out),
            Content::Element(elem) => {
                let mut inner = String::new();
                Renderer::new(&mut inner, self.options).write_element(elem, nesting + 1)?;
                escape_attribute(&inner, self.out);
            }
            Content::Lazy(lazy) => {
                let resolved = self.resolve(lazy)?;
                self.write_attr_value(&resolved, nesting)?;
            }
        }
        Ok(())
    }
}

fn bool_str(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

// =============================================================================
// Convenience methods
// =============================================================================

impl Element {
    /// Render this element to an HTML string with default options.
    pub fn to_html(&self) -> Result<String, RenderError> {
        render_element(self)
    }

    /// Render this element with custom options.
    pub fn to_html_with_options(&self, opts: &RenderOptions) -> Result<String, RenderError> {
        let mut out = String::new();
        Renderer::new(&mut out, opts).write_element(self, 0)?;
        Ok(out)
    }
}

impl Content {
    /// Render this value to an HTML string with default options.
    pub fn to_html(&self) -> Result<String, RenderError> {
        render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Element, safe};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn base(name: &str) -> crate::ElementBuilder {
        Element::base(name).unwrap()
    }

    #[test]
    fn test_empty_element() {
        let el = base("baseelement").build().unwrap();
        assert_eq!(el.to_html().unwrap(), "<baseelement></baseelement>");
    }

    #[test]
    fn test_text_escaping() {
        let el = base("p")
            .child("<script>alert('xss')</script>")
            .build()
            .unwrap();
        assert_eq!(
            el.to_html().unwrap(),
            "<p>&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn test_attribute_escaping() {
        let el = base("a")
            .attr("href", "test?a=1&b=2")
            .attr("title", "Say \"hello\"")
            .build()
            .unwrap();
        assert_eq!(
            el.to_html().unwrap(),
            "<a href=\"test?a=1&amp;b=2\" title=\"Say &quot;hello&quot;\"></a>"
        );
    }

    #[test]
    fn test_safe_string_is_verbatim() {
        let el = base("div")
            .child(safe("<b>bold</b>"))
            .attr("data-x", safe("&amp;"))
            .build()
            .unwrap();
        assert_eq!(
            el.to_html().unwrap(),
            "<div data-x=\"&amp;\"><b>bold</b></div>"
        );
    }

    #[test]
    fn test_booleans() {
        let el = base("input")
            .void(true)
            .attr("checked", true)
            .attr("disabled", false)
            .build()
            .unwrap();
        assert_eq!(
            el.to_html().unwrap(),
            "<input checked=\"true\" disabled=\"false\">"
        );
        assert_eq!(render(&Content::Bool(false)).unwrap(), "false");
    }

    #[test]
    fn test_void_emits_no_close_tag() {
        let el = base("img")
            .void(true)
            .attr("src", "a.png")
            .child("ignored")
            .build()
            .unwrap();
        assert_eq!(el.to_html().unwrap(), "<img src=\"a.png\">");
    }

    #[test]
    fn test_nested_elements_are_not_reescaped() {
        let inner = base("b").child("a & b").build().unwrap();
        let outer = base("p").child(inner).build().unwrap();
        assert_eq!(outer.to_html().unwrap(), "<p><b>a &amp; b</b></p>");
    }

    #[test]
    fn test_adjacent_children_abut() {
        let el = base("p")
            .child("Hello")
            .child("World")
            .child(1)
            .build()
            .unwrap();
        assert_eq!(el.to_html().unwrap(), "<p>HelloWorld1</p>");
    }

    #[test]
    fn test_callable_child_and_attribute() {
        let el = base("p")
            .attr("id", Content::lazy(|| "gen"))
            .child(Content::lazy(|| safe("<i>x</i>")))
            .child(Content::lazy(|| Content::lazy(|| "<deep>")))
            .build()
            .unwrap();
        assert_eq!(
            el.to_html().unwrap(),
            "<p id=\"gen\"><i>x</i>&lt;deep&gt;</p>"
        );
    }

    #[test]
    fn test_callable_invoked_per_render() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let el = base("p")
            .child(Content::lazy(move || counter.fetch_add(1, Ordering::SeqCst)))
            .build()
            .unwrap();
        assert_eq!(el.to_html().unwrap(), "<p>0</p>");
        assert_eq!(el.to_html().unwrap(), "<p>1</p>");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_callable_error_propagates() {
        let el = base("p")
            .child("before")
            .child(Content::try_lazy(|| Err::<String, _>("no token")))
            .build()
            .unwrap();
        assert_eq!(
            el.to_html().unwrap_err(),
            RenderError::Callable {
                message: "no token".to_string()
            }
        );
    }

    #[test]
    fn test_self_returning_callable_hits_limit() {
        fn forever() -> Content {
            Content::lazy(forever)
        }
        let opts = RenderOptions::new().max_callable_depth(8);
        assert_eq!(
            render_with_options(&forever(), &opts).unwrap_err(),
            RenderError::CallableDepthExceeded { limit: 8 }
        );
    }

    #[test]
    fn test_callable_returning_element_containing_itself() {
        fn nest() -> Content {
            Element::base("div")
                .unwrap()
                .child(Content::lazy(nest))
                .build()
                .unwrap()
                .into()
        }
        let opts = RenderOptions::new().max_element_depth(32);
        assert_eq!(
            render_with_options(&Content::lazy(nest), &opts).unwrap_err(),
            RenderError::ElementDepthExceeded { limit: 32 }
        );
    }

    #[test]
    fn test_deeply_nested_lazy_components_render() {
        fn nested(n: usize) -> Content {
            if n == 0 {
                return Content::text("leaf");
            }
            Content::lazy(move || {
                Element::base("div")
                    .unwrap()
                    .child(nested(n - 1))
                    .build()
                    .unwrap()
            })
        }
        let html = render(&nested(100)).unwrap();
        assert!(html.starts_with(&"<div>".repeat(100)));
        assert!(html.ends_with(&"</div>".repeat(100)));
        assert!(html.contains("<div>leaf</div>"));
    }

    #[test]
    fn test_failing_attribute_callable() {
        let el = base("p")
            .attr("title", Content::try_lazy(|| Err::<&str, _>("no title")))
            .child("body")
            .build()
            .unwrap();
        assert_eq!(
            el.to_html().unwrap_err(),
            RenderError::Callable {
                message: "no title".to_string()
            }
        );
    }

    #[test]
    fn test_attribute_callable_chain_hits_limit() {
        fn forever() -> Content {
            Content::lazy(forever)
        }
        let el = base("p").attr("id", forever()).build().unwrap();
        let opts = RenderOptions::new().max_callable_depth(4);
        assert_eq!(
            el.to_html_with_options(&opts).unwrap_err(),
            RenderError::CallableDepthExceeded { limit: 4 }
        );
    }

    #[test]
    fn test_depth_limit_allows_exact_chain() {
        let value = Content::lazy(|| Content::lazy(|| "ok"));
        let opts = RenderOptions::new().max_callable_depth(2);
        assert_eq!(render_with_options(&value, &opts).unwrap(), "ok");
        let opts = RenderOptions::new().max_callable_depth(1);
        assert!(render_with_options(&value, &opts).is_err());
    }

    #[test]
    fn test_element_as_attribute_value_is_escaped() {
        let b = base("b").child("x").build().unwrap();
        let el = base("div").attr("title", b).build().unwrap();
        assert_eq!(
            el.to_html().unwrap(),
            "<div title=\"&lt;b&gt;x&lt;/b&gt;\"></div>"
        );
    }

    #[test]
    fn test_top_level_scalars() {
        assert_eq!(render(&Content::from("a<b")).unwrap(), "a&lt;b");
        assert_eq!(render(&Content::from(3.25)).unwrap(), "3.25");
        assert_eq!(render(&safe("<br>").into()).unwrap(), "<br>");
    }
}
