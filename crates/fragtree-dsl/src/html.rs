/*
 * html.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! HTML element factories.
//!
//! Every factory takes a builder argument list, usually written with
//! [`frags!`](crate::frags):
//!
//! ```
//! use fragtree_dsl::frags;
//! use fragtree_dsl::html::{div, p, br};
//! use fragtree_dsl::attributes::id;
//!
//! let page = div(frags![id("main"), p(frags!["Hello"]), br(frags![])])?;
//! assert_eq!(page.children().len(), 2);
//! # use fragtree_types::HasChildren;
//! # Ok::<(), fragtree_types::FragmentError>(())
//! ```

use crate::macros::{container_factories, void_factories};

container_factories!(
    html => "html",
    head => "head",
    body => "body",
    div => "div",
    span => "span",
    p => "p",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    title => "title",
    header => "header",
    main => "main",
    section => "section",
    article => "article",
    footer => "footer",
    ul => "ul",
    li => "li",
    button => "button",
    select => "select",
    option => "option",
    a => "a",
    /// A `style` element; pass CSS source as string arguments.
    style => "style",
    pre => "pre",
);

void_factories!(
    br => "br",
    meta => "meta",
    input => "input",
    hr => "hr",
    img => "img",
    link => "link",
);
