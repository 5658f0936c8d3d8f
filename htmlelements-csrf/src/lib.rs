//! Request forgery token helpers for htmlelements.
//!
//! The web framework owns the token; this crate only asks for it through
//! [`CsrfTokenSource`] and turns it into ordinary content: a plain value, a
//! deferred value, or a hidden `<input>` ready to drop into a form.
//!
//! ```rust
//! use htmlelements_csrf::{CsrfTokenSource, csrf_input};
//!
//! struct Request {
//!     token: String,
//! }
//!
//! impl CsrfTokenSource for Request {
//!     fn csrf_token(&self) -> String {
//!         self.token.clone()
//!     }
//! }
//!
//! let request = Request { token: "abc123".into() };
//! let input = csrf_input(&request)?;
//! assert_eq!(
//!     input.to_html()?,
//!     r#"<input value="abc123" type="hidden" name="csrfmiddlewaretoken">"#
//! );
//! # Ok::<(), htmlelements::Error>(())
//! ```

use std::sync::Arc;

use htmlelements::tags::input;
use htmlelements::{ConstructionError, Content, Element};

#[cfg(feature = "tracing")]
use tracing::trace;

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}

/// Default `name` of the hidden token input.
pub const DEFAULT_FIELD_NAME: &str = "csrfmiddlewaretoken";

/// Default `type` of the token input.
pub const DEFAULT_INPUT_TYPE: &str = "hidden";

/// Something that can hand out the current request's token, usually the
/// framework's request type.
pub trait CsrfTokenSource {
    fn csrf_token(&self) -> String;
}

impl<T: CsrfTokenSource + ?Sized> CsrfTokenSource for &T {
    fn csrf_token(&self) -> String {
        (**self).csrf_token()
    }
}

impl<T: CsrfTokenSource + ?Sized> CsrfTokenSource for Arc<T> {
    fn csrf_token(&self) -> String {
        (**self).csrf_token()
    }
}

/// Fetch the token now.
pub fn csrf_token<R: CsrfTokenSource + ?Sized>(request: &R) -> String {
    trace!("fetching csrf token");
    request.csrf_token()
}

/// A value that fetches the token only when it is rendered.
pub fn lazy_csrf_token<R>(request: Arc<R>) -> Content
where
    R: CsrfTokenSource + Send + Sync + ?Sized + 'static,
{
    Content::lazy(move || csrf_token(&*request))
}

/// A hidden `<input>` carrying the token under the default field name.
pub fn csrf_input<R: CsrfTokenSource + ?Sized>(request: &R) -> Result<Element, ConstructionError> {
    csrf_input_with(request, DEFAULT_INPUT_TYPE, DEFAULT_FIELD_NAME)
}

/// Like [`csrf_input`], with the input's `type` and `name` chosen by the caller.
pub fn csrf_input_with<R: CsrfTokenSource + ?Sized>(
    request: &R,
    input_type: &str,
    name: &str,
) -> Result<Element, ConstructionError> {
    input()
        .builder()
        .attr("value", csrf_token(request))
        .attr("type", input_type)
        .attr("name", name)
        .build()
}
