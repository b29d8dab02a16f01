/*
 * attributes.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Attribute factories.
//!
//! Numeric values are written with Rust's shortest `f64` formatting, so
//! `width(10.0)` yields `width="10"` and `width(2.5)` yields `width="2.5"`.

use crate::macros::{numeric_attributes, string_attributes};
use fragtree_types::{Attribute, FragmentResult};

/// An attribute with a name chosen at runtime. Fails on an empty name.
pub fn attr(name: impl Into<String>, value: impl Into<String>) -> FragmentResult<Attribute> {
    Attribute::new(name, value)
}

string_attributes!(
    id => "id",
    /// The `class` attribute.
    class_name => "class",
    href => "href",
    on_click => "onclick",
    /// The `type` attribute.
    type_ => "type",
    placeholder => "placeholder",
    value => "value",
    name => "name",
    content => "content",
    charset => "charset",
    xmlns => "xmlns",
    fill => "fill",
    stroke => "stroke",
    transform => "transform",
    text_anchor => "text-anchor",
    font_weight => "font-weight",
    offset => "offset",
    stop_color => "stop-color",
    /// The `filter` attribute, e.g. `filter("url(#shadow)")`.
    filter => "filter",
);

numeric_attributes!(
    width => "width",
    height => "height",
    x => "x",
    y => "y",
    cx => "cx",
    cy => "cy",
    r => "r",
    stroke_width => "stroke-width",
    font_size => "font-size",
    dx => "dx",
    dy => "dy",
    std_deviation => "stdDeviation",
);

/// The SVG `viewBox` attribute: `min-x min-y width height`.
pub fn view_box(min_x: f64, min_y: f64, width: f64, height: f64) -> Attribute {
    Attribute::known("viewBox", format!("{} {} {} {}", min_x, min_y, width, height))
}
