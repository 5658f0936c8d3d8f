//! One function per standard HTML element.
//!
//! Each function resolves its tag through [`TagFactory::global`], so
//! `tags::div()` and `TagFactory::global().resolve("div")` hand out the same
//! cached type. Names outside this list (custom elements, future tags) go
//! through [`TagFactory::resolve`] directly.
//!
//! ```rust
//! use htmlelements::tags::{div, p};
//!
//! let html = div()
//!     .builder()
//!     .child(p().builder().child("Hello World").attr("classes", "p-class").build()?)
//!     .attr("classes", "div-class")
//!     .build()?
//!     .to_html()?;
//! assert_eq!(
//!     html,
//!     r#"<div class="div-class"><p class="p-class">Hello World</p></div>"#
//! );
//! # Ok::<(), htmlelements::Error>(())
//! ```

use crate::factory::{Tag, TagFactory};

macro_rules! tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("The `<", stringify!($name), ">` element type.")]
            pub fn $name() -> Tag {
                TagFactory::global().resolve_known(stringify!($name))
            }
        )*

        /// Every tag name with a function in this module.
        pub const ALL: &[&str] = &[$(stringify!($name)),*];
    };
}

tags!(
    a,
    abbr,
    address,
    area,
    article,
    aside,
    audio,
    b,
    base,
    bdi,
    bdo,
    blockquote,
    body,
    br,
    button,
    canvas,
    caption,
    cite,
    code,
    col,
    colgroup,
    data,
    datalist,
    dd,
    del,
    details,
    dfn,
    dialog,
    div,
    dl,
    dt,
    em,
    embed,
    fieldset,
    figcaption,
    figure,
    footer,
    form,
    h1,
    h2,
    h3,
    h4,
    h5,
    h6,
    head,
    header,
    hgroup,
    hr,
    html,
    i,
    iframe,
    img,
    input,
    ins,
    kbd,
    label,
    legend,
    li,
    link,
    main,
    map,
    mark,
    menu,
    meta,
    meter,
    nav,
    noscript,
    object,
    ol,
    optgroup,
    option,
    output,
    p,
    param,
    picture,
    pre,
    progress,
    q,
    rp,
    rt,
    ruby,
    s,
    samp,
    script,
    search,
    section,
    select,
    slot,
    small,
    source,
    span,
    strong,
    style,
    sub,
    summary,
    sup,
    table,
    tbody,
    td,
    template,
    textarea,
    tfoot,
    th,
    thead,
    time,
    title,
    tr,
    track,
    u,
    ul,
    var,
    video,
    wbr,
);
