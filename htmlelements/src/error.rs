//! Error types for element construction and rendering.

use facet::Facet;

/// Errors raised while resolving a tag or constructing an element.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum ConstructionError {
    /// invalid tag name `{tag}`
    InvalidTagName { tag: String },

    /// reserved keyword `{key}` cannot be used on a tag whose void flag is fixed
    ReservedKeyword { key: String },

    /// reserved keyword `{key}` expects a boolean value
    InvalidVoidMarker { key: String },

    /// void flag supplied more than once
    ConflictingVoidMarker,

    /// invalid attribute name `{name}`
    InvalidAttributeName { name: String },
}

/// Errors raised while rendering a value to HTML.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum RenderError {
    /// callable failed: {message}
    Callable { message: String },

    /// callable chain exceeded the depth limit of {limit}
    CallableDepthExceeded { limit: usize },

    /// element nesting exceeded the depth limit of {limit}
    ElementDepthExceeded { limit: usize },
}

/// Either kind of error, for operations that both construct and render.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum Error {
    /// construction failed: {0}
    Construction(#[facet(error::from)] ConstructionError),

    /// render failed: {0}
    Render(#[facet(error::from)] RenderError),
}
