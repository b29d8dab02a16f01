/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Typed markup fragment trees.
//!
//! This crate defines the data model for HTML/XML/SVG-like documents built
//! from typed fragments:
//!
//! - A closed kind taxonomy ([`FragmentKind`] and its sub-levels) with
//!   borrowed view enums for exhaustive, copy-free discrimination
//! - Concrete entities: [`Attribute`], [`Text`], [`Comment`], [`CData`],
//!   [`Doctype`], [`ContainerElement`], [`VoidElement`] and
//!   [`ProcessingInstruction`]
//! - Fluent capability traits ([`HasAttributes`], [`HasChildren`],
//!   [`HasStyle`], ...) whose mutators return `&mut Self`
//! - Block/inline [`RenderingBehavior`] with a TOML-configurable
//!   [`RenderingPolicy`]
//!
//! Serialization of trees to markup is left to downstream crates; they walk
//! a root [`Node`] and discriminate on [`Node::kind`].
//!
//! # Example
//!
//! ```
//! use fragtree_types::{describe, ContainerElement, HasAttributes, HasChildren, Node, Text};
//!
//! let mut div = ContainerElement::new("div")?;
//! div.set_attribute("id", "main").add_child(Text::new("hello"));
//!
//! let root = Node::from(div);
//! assert_eq!(describe::summarize(&root), "Container[div, children=1]");
//! # Ok::<(), fragtree_types::FragmentError>(())
//! ```

pub mod attr;
pub mod capability;
pub mod describe;
pub mod element;
pub mod error;
pub mod kind;
pub mod meta;
pub mod node;
pub mod rendering;
pub mod text;

// Re-export main types at crate root
pub use attr::{Attribute, Attributes};
pub use capability::{
    HasAttributes, HasCacheKey, HasChildren, HasClasses, HasStyle, HasText, HasTimestamp,
};
pub use element::{ContainerElement, ProcessingInstruction, VoidElement};
pub use error::{FragmentError, FragmentResult};
pub use kind::{
    AttributelessKind, Classify, ElementKind, FragmentKind, NodeKind, SelfClosingKind,
    StringNodeKind,
};
pub use meta::InstanceMeta;
pub use node::{FlatFragment, Flatten, Fragment, FragmentCollection, Node};
pub use rendering::{Renderable, RenderingBehavior, RenderingPolicy};
pub use text::{CData, Comment, Doctype, Text};
