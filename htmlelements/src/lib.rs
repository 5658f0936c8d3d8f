//! Build HTML element trees in memory and render them to escaped HTML.
//!
//! htmlelements provides:
//! - **Elements**: tag, ordered attributes, ordered children, void flag
//! - **Tag factory**: element types synthesized by name and cached
//! - **Rendering**: one depth-first pass with inline escaping, safe-string
//!   bypass, boolean coercion and lazy callables
//! - **Attribute codec**: `classes` / `label_for` aliases for `class` / `for`
//!
//! # Example
//!
//! ```rust
//! use htmlelements::tags::{img, p};
//! use htmlelements::{Content, TagFactory, safe};
//!
//! let para = p()
//!     .builder()
//!     .child("Fish & chips ")
//!     .child(safe("<em>tonight</em>"))
//!     .attr("classes", "menu")
//!     .attr("hidden", false)
//!     .build()?;
//! assert_eq!(
//!     para.to_html()?,
//!     r#"<p class="menu" hidden="false">Fish &amp; chips <em>tonight</em></p>"#
//! );
//!
//! // Void elements drop their children and have no closing tag.
//! let image = img().builder().child(para).build()?;
//! assert_eq!(image.to_html()?, "<img>");
//!
//! // Custom tags resolve on demand.
//! let widget = TagFactory::global().resolve("my-widget")?;
//! let el = widget
//!     .builder()
//!     .child(Content::lazy(|| 40 + 2))
//!     .build()?;
//! assert_eq!(el.to_html()?, "<my-widget>42</my-widget>");
//! # Ok::<(), htmlelements::Error>(())
//! ```

mod tracing_macros;
pub(crate) use tracing_macros::{debug, trace};

pub mod codec;
mod content;
mod document;
mod element;
mod error;
pub mod factory;
mod render;
pub mod tags;

pub use codec::{AttributeCodec, AttributeName, VOID_KEY, escape};
pub use content::{Content, Lazy, SafeString, safe};
pub use document::{DOCTYPE, html, render_document};
pub use element::{Element, ElementBuilder};
pub use error::{ConstructionError, Error, RenderError};
pub use factory::{Tag, TagFactory, VOID_ELEMENTS, is_void_tag};
pub use render::{RenderOptions, render, render_element, render_with_options};
