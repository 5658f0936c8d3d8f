//! Whole-document rendering with a leading doctype.

use crate::content::Content;
use crate::element::Element;
use crate::error::{Error, RenderError};
use crate::tags;

/// The doctype prepended to every rendered document.
pub const DOCTYPE: &str = "<!doctype html>";

/// Wrap `children` in an `<html>` element with `attributes` and render it
/// behind the doctype.
///
/// ```rust
/// let page = htmlelements::html(["content"], [("lang", "en")])?;
/// assert_eq!(page, r#"<!doctype html><html lang="en">content</html>"#);
/// # Ok::<(), htmlelements::Error>(())
/// ```
pub fn html<C, A, K, V>(children: C, attributes: A) -> Result<String, Error>
where
    C: IntoIterator,
    C::Item: Into<Content>,
    A: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Content>,
{
    let root = tags::html().element(children, attributes)?;
    Ok(render_document(&root)?)
}

/// Render an already-built root element behind the doctype.
///
/// The root is rendered as given; it is not wrapped in `<html>`.
pub fn render_document(root: &Element) -> Result<String, RenderError> {
    let body = root.to_html()?;
    let mut out = String::with_capacity(DOCTYPE.len() + body.len());
    out.push_str(DOCTYPE);
    out.push_str(&body);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstructionError;
    use crate::tags::{body, h1, head, title};

    #[test]
    fn test_empty_document() {
        let page = html(Vec::<Content>::new(), Vec::<(&str, Content)>::new()).unwrap();
        assert_eq!(page, "<!doctype html><html></html>");
    }

    #[test]
    fn test_head_and_body() {
        let head = head()
            .builder()
            .child(title().builder().child("T").build().unwrap())
            .build()
            .unwrap();
        let body = body()
            .builder()
            .child(
                h1()
                    .builder()
                    .child("Hi")
                    .attr("classes", "h1")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let page = html([head, body], Vec::<(&str, Content)>::new()).unwrap();
        assert_eq!(
            page,
            concat!(
                "<!doctype html><html><head><title>T</title></head>",
                "<body><h1 class=\"h1\">Hi</h1></body></html>",
            )
        );
    }

    #[test]
    fn test_void_marker_on_html_is_rejected() {
        let err = html(["x"], [("_void", true)]).unwrap_err();
        assert_eq!(
            err,
            Error::Construction(ConstructionError::ReservedKeyword {
                key: "_void".to_string()
            })
        );
    }

    #[test]
    fn test_render_document_keeps_root() {
        let root = tags::html().empty();
        assert_eq!(
            render_document(&root).unwrap(),
            "<!doctype html><html></html>"
        );
    }
}
