/*
 * svg.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! SVG element factories.
//!
//! `filter` here is the `<filter>` element; the `filter` attribute lives in
//! [`attributes`](crate::attributes).

use crate::macros::{container_factories, void_factories};
use fragtree_types::{ContainerElement, HasAttributes, HasChildren, Text};

container_factories!(
    svg => "svg",
    defs => "defs",
    g => "g",
    linear_gradient => "linearGradient",
    filter => "filter",
);

void_factories!(
    rect => "rect",
    circle => "circle",
    stop => "stop",
    fe_drop_shadow => "feDropShadow",
);

/// A `text` element positioned at `(x, y)`.
pub fn text_svg(x: f64, y: f64, content: impl Into<String>) -> ContainerElement {
    let mut element = ContainerElement::known("text");
    element
        .set_attribute("x", x.to_string())
        .set_attribute("y", y.to_string())
        .add_child(Text::new(content));
    element
}
