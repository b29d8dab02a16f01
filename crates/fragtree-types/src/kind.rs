/*
 * kind.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The closed fragment kind taxonomy and its discrimination views.
 */

//! Fragment kind classification.
//!
//! Every fragment belongs to exactly one leaf of this hierarchy:
//!
//! ```text
//! FragmentKind    = Attribute | Node | FragmentCollection
//! NodeKind        = AttributelessNode | Element
//! AttributelessKind = StringNode | Doctype
//! StringNodeKind  = Text | Comment | CData
//! ElementKind     = ContainerElement | SelfClosingElement
//! SelfClosingKind = VoidElement | ProcessingInstruction
//! ```
//!
//! Each level is a borrowed view enum whose variants carry either the next
//! level or a reference to the concrete entity, so one `match` reaches the
//! entity itself without copying or downcasting:
//!
//! ```
//! use fragtree_types::{Classify, FragmentKind, NodeKind, ElementKind, Text, ContainerElement};
//!
//! let div = ContainerElement::new("div").unwrap();
//! match div.fragment_kind() {
//!     FragmentKind::Node(NodeKind::Element(ElementKind::ContainerElement(c))) => {
//!         assert!(std::ptr::eq(c, &div));
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! The taxonomy is closed. Adding a concrete kind means adding a variant,
//! which every exhaustive `match` over that level must then handle.

use crate::attr::{Attribute, Attributes};
use crate::capability::{HasAttributes, HasText};
use crate::element::{ContainerElement, ProcessingInstruction, VoidElement};
use crate::node::{Fragment, FragmentCollection, Node};
use crate::rendering::{Renderable, RenderingBehavior};
use crate::text::{CData, Comment, Doctype, Text};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy)]
pub enum FragmentKind<'a> {
    Attribute(&'a Attribute),
    Node(NodeKind<'a>),
    FragmentCollection(&'a FragmentCollection),
}

#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    AttributelessNode(AttributelessKind<'a>),
    Element(ElementKind<'a>),
}

#[derive(Debug, Clone, Copy)]
pub enum AttributelessKind<'a> {
    StringNode(StringNodeKind<'a>),
    Doctype(&'a Doctype),
}

#[derive(Debug, Clone, Copy)]
pub enum StringNodeKind<'a> {
    Text(&'a Text),
    Comment(&'a Comment),
    CData(&'a CData),
}

#[derive(Debug, Clone, Copy)]
pub enum ElementKind<'a> {
    ContainerElement(&'a ContainerElement),
    SelfClosingElement(SelfClosingKind<'a>),
}

#[derive(Debug, Clone, Copy)]
pub enum SelfClosingKind<'a> {
    VoidElement(&'a VoidElement),
    ProcessingInstruction(&'a ProcessingInstruction),
}

/// Exposes the kind tag of a fragment.
///
/// Implemented by every concrete entity as well as by the owned
/// [`Node`] and [`Fragment`] enums.
pub trait Classify {
    fn fragment_kind(&self) -> FragmentKind<'_>;
}

impl<'a> FragmentKind<'a> {
    pub fn name(&self) -> &'static str {
        match *self {
            FragmentKind::Attribute(_) => "Attribute",
            FragmentKind::Node(_) => "Node",
            FragmentKind::FragmentCollection(_) => "FragmentCollection",
        }
    }

    pub fn as_attribute(&self) -> Option<&'a Attribute> {
        match *self {
            FragmentKind::Attribute(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<NodeKind<'a>> {
        match *self {
            FragmentKind::Node(n) => Some(n),
            _ => None,
        }
    }
}

impl<'a> NodeKind<'a> {
    pub fn name(&self) -> &'static str {
        match *self {
            NodeKind::AttributelessNode(_) => "AttributelessNode",
            NodeKind::Element(_) => "Element",
        }
    }

    /// Name of the concrete entity kind, e.g. `"Text"` or `"VoidElement"`.
    pub fn leaf_name(&self) -> &'static str {
        match *self {
            NodeKind::AttributelessNode(AttributelessKind::StringNode(s)) => s.name(),
            NodeKind::AttributelessNode(AttributelessKind::Doctype(_)) => "Doctype",
            NodeKind::Element(ElementKind::ContainerElement(_)) => "ContainerElement",
            NodeKind::Element(ElementKind::SelfClosingElement(s)) => s.name(),
        }
    }

    pub fn as_element(&self) -> Option<ElementKind<'a>> {
        match *self {
            NodeKind::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_attributeless(&self) -> Option<AttributelessKind<'a>> {
        match *self {
            NodeKind::AttributelessNode(a) => Some(a),
            _ => None,
        }
    }
}

impl Renderable for NodeKind<'_> {
    fn rendering_behavior(&self) -> RenderingBehavior {
        match *self {
            NodeKind::AttributelessNode(AttributelessKind::StringNode(s)) => match s {
                StringNodeKind::Text(t) => t.rendering_behavior(),
                StringNodeKind::Comment(c) => c.rendering_behavior(),
                StringNodeKind::CData(c) => c.rendering_behavior(),
            },
            NodeKind::AttributelessNode(AttributelessKind::Doctype(d)) => d.rendering_behavior(),
            NodeKind::Element(ElementKind::ContainerElement(c)) => c.rendering_behavior(),
            NodeKind::Element(ElementKind::SelfClosingElement(s)) => match s {
                SelfClosingKind::VoidElement(v) => v.rendering_behavior(),
                SelfClosingKind::ProcessingInstruction(p) => p.rendering_behavior(),
            },
        }
    }
}

impl AttributelessKind<'_> {
    pub fn name(&self) -> &'static str {
        match *self {
            AttributelessKind::StringNode(_) => "StringNode",
            AttributelessKind::Doctype(_) => "Doctype",
        }
    }
}

impl<'a> StringNodeKind<'a> {
    pub fn name(&self) -> &'static str {
        match *self {
            StringNodeKind::Text(_) => "Text",
            StringNodeKind::Comment(_) => "Comment",
            StringNodeKind::CData(_) => "CData",
        }
    }

    /// The undecorated payload.
    pub fn payload(&self) -> &'a str {
        match *self {
            StringNodeKind::Text(t) => t.content(),
            StringNodeKind::Comment(c) => c.comment(),
            StringNodeKind::CData(c) => c.data(),
        }
    }

    pub fn text_content(&self) -> Cow<'a, str> {
        match *self {
            StringNodeKind::Text(t) => t.text_content(),
            StringNodeKind::Comment(c) => c.text_content(),
            StringNodeKind::CData(c) => c.text_content(),
        }
    }
}

impl<'a> ElementKind<'a> {
    pub fn name(&self) -> &'static str {
        match *self {
            ElementKind::ContainerElement(_) => "ContainerElement",
            ElementKind::SelfClosingElement(_) => "SelfClosingElement",
        }
    }

    /// The tag name; for a processing instruction, its target.
    pub fn tag_name(&self) -> &'a str {
        match *self {
            ElementKind::ContainerElement(c) => c.tag_name(),
            ElementKind::SelfClosingElement(s) => s.tag_name(),
        }
    }

    pub fn attributes(&self) -> &'a Attributes {
        match *self {
            ElementKind::ContainerElement(c) => c.attributes(),
            ElementKind::SelfClosingElement(s) => s.attributes(),
        }
    }
}

impl<'a> SelfClosingKind<'a> {
    pub fn name(&self) -> &'static str {
        match *self {
            SelfClosingKind::VoidElement(_) => "VoidElement",
            SelfClosingKind::ProcessingInstruction(_) => "ProcessingInstruction",
        }
    }

    pub fn tag_name(&self) -> &'a str {
        match *self {
            SelfClosingKind::VoidElement(v) => v.tag_name(),
            SelfClosingKind::ProcessingInstruction(p) => p.target(),
        }
    }

    pub fn attributes(&self) -> &'a Attributes {
        match *self {
            SelfClosingKind::VoidElement(v) => v.attributes(),
            SelfClosingKind::ProcessingInstruction(p) => p.attributes(),
        }
    }
}

impl Node {
    /// The node's position in the kind hierarchy.
    pub fn kind(&self) -> NodeKind<'_> {
        match self {
            Node::Text(t) => t.node_kind(),
            Node::Comment(c) => c.node_kind(),
            Node::CData(c) => c.node_kind(),
            Node::Doctype(d) => d.node_kind(),
            Node::Container(c) => c.node_kind(),
            Node::Void(v) => v.node_kind(),
            Node::ProcessingInstruction(p) => p.node_kind(),
        }
    }
}

impl Fragment {
    pub fn kind(&self) -> FragmentKind<'_> {
        match self {
            Fragment::Attribute(a) => FragmentKind::Attribute(a),
            Fragment::Node(n) => FragmentKind::Node(n.kind()),
            Fragment::Collection(c) => FragmentKind::FragmentCollection(c),
        }
    }
}

impl Text {
    pub fn node_kind(&self) -> NodeKind<'_> {
        NodeKind::AttributelessNode(AttributelessKind::StringNode(StringNodeKind::Text(self)))
    }
}

impl Comment {
    pub fn node_kind(&self) -> NodeKind<'_> {
        NodeKind::AttributelessNode(AttributelessKind::StringNode(StringNodeKind::Comment(self)))
    }
}

impl CData {
    pub fn node_kind(&self) -> NodeKind<'_> {
        NodeKind::AttributelessNode(AttributelessKind::StringNode(StringNodeKind::CData(self)))
    }
}

impl Doctype {
    pub fn node_kind(&self) -> NodeKind<'_> {
        NodeKind::AttributelessNode(AttributelessKind::Doctype(self))
    }
}

impl ContainerElement {
    pub fn node_kind(&self) -> NodeKind<'_> {
        NodeKind::Element(ElementKind::ContainerElement(self))
    }
}

impl VoidElement {
    pub fn node_kind(&self) -> NodeKind<'_> {
        NodeKind::Element(ElementKind::SelfClosingElement(
            SelfClosingKind::VoidElement(self),
        ))
    }
}

impl ProcessingInstruction {
    pub fn node_kind(&self) -> NodeKind<'_> {
        NodeKind::Element(ElementKind::SelfClosingElement(
            SelfClosingKind::ProcessingInstruction(self),
        ))
    }
}

macro_rules! impl_classify_node {
    ($($type:ty),*) => {
        $(
            impl Classify for $type {
                fn fragment_kind(&self) -> FragmentKind<'_> {
                    FragmentKind::Node(self.node_kind())
                }
            }
        )*
    };
}

impl_classify_node!(
    Text,
    Comment,
    CData,
    Doctype,
    ContainerElement,
    VoidElement,
    ProcessingInstruction
);

impl Classify for Node {
    fn fragment_kind(&self) -> FragmentKind<'_> {
        FragmentKind::Node(self.kind())
    }
}

impl Classify for Attribute {
    fn fragment_kind(&self) -> FragmentKind<'_> {
        FragmentKind::Attribute(self)
    }
}

impl Classify for FragmentCollection {
    fn fragment_kind(&self) -> FragmentKind<'_> {
        FragmentKind::FragmentCollection(self)
    }
}

impl Classify for Fragment {
    fn fragment_kind(&self) -> FragmentKind<'_> {
        self.kind()
    }
}
