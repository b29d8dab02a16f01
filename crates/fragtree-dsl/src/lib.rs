/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Builder DSL for typed markup fragment trees.
//!
//! Trees are written as nested factory calls whose arguments mix
//! attributes, child nodes, raw strings and fragment collections:
//!
//! ```
//! use fragtree_dsl::{frags, multi_line_texts, styled_text};
//! use fragtree_dsl::attributes::{class_name, id};
//! use fragtree_dsl::html::{body, div, h1, html, p};
//! use fragtree_types::{HasAttributes, HasChildren, Node};
//!
//! let page = html(frags![body(frags![
//!     div(frags![
//!         id("main"),
//!         h1(frags!["Fragments"]),
//!         p(frags![
//!             "Built from ",
//!             styled_text("typed", "font-weight: bold"),
//!             " parts.",
//!         ]),
//!         class_name("content"),
//!         multi_line_texts(["one", "two"]),
//!     ]),
//! ])])?;
//!
//! let Node::Container(body) = &page.children()[0] else {
//!     unreachable!()
//! };
//! let Node::Container(main) = &body.children()[0] else {
//!     unreachable!()
//! };
//! assert_eq!(main.attribute("class"), Some("content"));
//! // h1, p, then "one", br, "two"
//! assert_eq!(main.children().len(), 5);
//! # Ok::<(), fragtree_types::FragmentError>(())
//! ```
//!
//! Builders classify each argument by kind: attributes merge into the
//! element's attribute map (last write wins), nodes append to its children,
//! and fragment collections are flattened in place to any depth. A failed
//! nested call makes every enclosing call fail with the same error.

mod arg;
mod builder;
mod macros;
mod text;

pub mod attributes;
pub mod html;
pub mod svg;

pub use arg::{Arg, IntoFragment};
pub use builder::{build_element, build_void_element};
pub use text::{frags, multi_line_texts, paragraph, styled_text, text, text_element};

/// Glob-importable factories for HTML and SVG documents.
///
/// The SVG `<filter>` element is left out to avoid clashing with the
/// `filter` attribute; use [`svg::filter`] for it.
pub mod prelude {
    pub use crate::attributes::*;
    pub use crate::html::*;
    pub use crate::svg::{
        circle, defs, fe_drop_shadow, g, linear_gradient, rect, stop, svg, text_svg,
    };
    pub use crate::{
        Arg, IntoFragment, build_element, build_void_element, frags, multi_line_texts, paragraph,
        styled_text, text, text_element,
    };
}
