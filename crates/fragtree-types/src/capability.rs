/*
 * capability.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Capability traits attachable to any entity, independent of its kind.
 */

//! Fluent capability traits.
//!
//! A capability is a trait; an entity carries whichever subset it
//! implements, and generic code discovers them through trait bounds rather
//! than through the kind taxonomy.
//!
//! Every mutating operation returns `&mut Self`, the exact concrete type the
//! chain started with, so capabilities from different traits compose:
//!
//! ```
//! use fragtree_types::{ContainerElement, HasChildren, HasClasses, HasStyle, Text};
//!
//! let mut div = ContainerElement::new("div").unwrap();
//! div.add_child(Text::new("Hello"))
//!     .set_style("color", "blue")
//!     .add_child(Text::new("World"))
//!     .add_class("container");
//!
//! assert_eq!(div.children().len(), 2);
//! assert!(div.has_class("container"));
//! ```

use crate::attr::Attributes;
use crate::node::Node;
use std::borrow::Cow;
use std::time::SystemTime;
use uuid::Uuid;

/// An entity with an attribute map.
pub trait HasAttributes {
    /// Read-only view of the attribute map.
    fn attributes(&self) -> &Attributes;

    /// Mutable access to the attribute map.
    ///
    /// Prefer the fluent methods; this exists so capability traits can be
    /// implemented outside this crate.
    fn attributes_mut(&mut self) -> &mut Attributes;

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes().get(name)
    }

    /// Set an attribute, overwriting any existing value.
    ///
    /// An empty name is not a valid attribute; it is dropped with a warning.
    fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.attributes_mut().insert(name.into(), value.into());
        self
    }

    fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes_mut().remove(name)
    }
}

/// An entity that owns an ordered list of child nodes.
pub trait HasChildren {
    fn children(&self) -> &[Node];

    /// Append a node. Implementors must keep insertion order.
    fn push_child(&mut self, node: Node);

    /// Remove and return the child at `index`, if any.
    fn remove_child(&mut self, index: usize) -> Option<Node>;

    fn clear_children(&mut self);

    /// Append a child to the end of the child list.
    fn add_child(&mut self, child: impl Into<Node>) -> &mut Self
    where
        Self: Sized,
    {
        self.push_child(child.into());
        self
    }
}

/// An entity whose content is a single string.
pub trait HasText {
    /// The text derived from the payload, including any kind-specific
    /// delimiters.
    fn text_content(&self) -> Cow<'_, str>;
}

/// An entity that can record when it was captured.
pub trait HasTimestamp {
    fn timestamp(&self) -> Option<SystemTime>;

    fn set_timestamp(&mut self, at: SystemTime);

    /// Record the current time.
    fn with_timestamp(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.set_timestamp(SystemTime::now());
        self
    }
}

/// An entity with a per-instance cache key.
pub trait HasCacheKey {
    fn instance_id(&self) -> Uuid;

    /// Stable for the lifetime of the instance. Not content-addressed:
    /// structurally equal instances have different keys.
    fn cache_key(&self) -> String {
        format!("cache_{}", self.instance_id())
    }
}

/// Inline style declarations kept in the `style` attribute.
pub trait HasStyle: HasAttributes {
    /// Set one style property, replacing an earlier declaration of it.
    fn set_style(&mut self, property: &str, value: &str) -> &mut Self
    where
        Self: Sized,
    {
        let property = property.trim();
        if property.is_empty() {
            return self;
        }
        let mut declarations = parse_style(self.attribute("style").unwrap_or_default());
        match declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value.trim(),
            None => declarations.push((property, value.trim())),
        }
        let style = render_style(&declarations);
        self.set_attribute("style", style)
    }

    fn style(&self, property: &str) -> Option<String> {
        parse_style(self.attribute("style")?)
            .into_iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.to_string())
    }
}

impl<T: HasAttributes + ?Sized> HasStyle for T {}

/// CSS classes kept in the `class` attribute.
pub trait HasClasses: HasAttributes {
    /// Add a class unless it is already present.
    fn add_class(&mut self, class: &str) -> &mut Self
    where
        Self: Sized,
    {
        let class = class.trim();
        if class.is_empty() || self.has_class(class) {
            return self;
        }
        let classes = match self.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim(), class)
            }
            _ => class.to_string(),
        };
        self.set_attribute("class", classes)
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .unwrap_or_default()
            .split_whitespace()
    }
}

impl<T: HasAttributes + ?Sized> HasClasses for T {}

fn parse_style(style: &str) -> Vec<(&str, &str)> {
    style
        .split(';')
        .filter_map(|declaration| declaration.split_once(':'))
        .map(|(p, v)| (p.trim(), v.trim()))
        .filter(|(p, _)| !p.is_empty())
        .collect()
}

fn render_style(declarations: &[(&str, &str)]) -> String {
    declarations
        .iter()
        .map(|(p, v)| format!("{}: {}", p, v))
        .collect::<Vec<_>>()
        .join("; ")
}
