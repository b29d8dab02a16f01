/*
 * describe.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Human-readable descriptions of fragments, built by exhaustive
//! discrimination over the kind hierarchy.

use crate::capability::HasChildren;
use crate::kind::{
    AttributelessKind, Classify, ElementKind, FragmentKind, NodeKind, SelfClosingKind,
    StringNodeKind,
};

/// The concrete kind name, e.g. `"Text"` or `"VoidElement"`.
pub fn detailed_kind(fragment: &impl Classify) -> &'static str {
    match fragment.fragment_kind() {
        FragmentKind::Attribute(_) => "Attribute",
        FragmentKind::FragmentCollection(_) => "FragmentCollection",
        FragmentKind::Node(node) => node.leaf_name(),
    }
}

/// The second-level kind, e.g. `"Any Element"` for every element kind.
pub fn general_kind(fragment: &impl Classify) -> &'static str {
    match fragment.fragment_kind() {
        FragmentKind::Attribute(_) => "Any Attribute",
        FragmentKind::Node(NodeKind::AttributelessNode(_)) => "Any AttributelessNode",
        FragmentKind::Node(NodeKind::Element(_)) => "Any Element",
        FragmentKind::FragmentCollection(_) => "collection of fragments",
    }
}

/// A one-line summary such as `Container[div, children=2]`.
pub fn summarize(fragment: &impl Classify) -> String {
    match fragment.fragment_kind() {
        FragmentKind::Attribute(a) => format!("Attr[{}={}]", a.name(), a.value()),
        FragmentKind::FragmentCollection(c) => format!("Frags[{}]", c.len()),
        FragmentKind::Node(NodeKind::AttributelessNode(node)) => match node {
            AttributelessKind::StringNode(StringNodeKind::Text(t)) => {
                format!("Text[{}]", t.content())
            }
            AttributelessKind::StringNode(StringNodeKind::Comment(c)) => {
                format!("Comment[{}]", c.comment())
            }
            AttributelessKind::StringNode(StringNodeKind::CData(c)) => {
                format!("CData[{}]", c.data())
            }
            AttributelessKind::Doctype(d) => format!("Doctype[{}]", d.name()),
        },
        FragmentKind::Node(NodeKind::Element(element)) => match element {
            ElementKind::ContainerElement(c) => {
                format!("Container[{}, children={}]", c.tag_name(), c.children().len())
            }
            ElementKind::SelfClosingElement(SelfClosingKind::VoidElement(v)) => {
                format!("Void[{}]", v.tag_name())
            }
            ElementKind::SelfClosingElement(SelfClosingKind::ProcessingInstruction(p)) => {
                format!("PI[{}]", p.target())
            }
        },
    }
}
