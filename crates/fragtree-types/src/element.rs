/*
 * element.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Element entities: container elements that own children, and the
//! self-closing elements (void elements and processing instructions).

use crate::attr::Attributes;
use crate::capability::{HasAttributes, HasCacheKey, HasChildren, HasText, HasTimestamp};
use crate::error::{FragmentError, FragmentResult, require_non_empty};
use crate::meta::InstanceMeta;
use crate::node::Node;
use crate::rendering::{Renderable, RenderingBehavior};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::SystemTime;
use uuid::Uuid;

/// An element that owns an ordered list of child nodes, e.g. `<div>...</div>`.
///
/// Children are owned exclusively: adding a node moves it into this
/// element. Sharing a subtree between two parents requires an explicit
/// clone, which yields an independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContainerElementRepr")]
pub struct ContainerElement {
    tag_name: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rendering: Option<RenderingBehavior>,
    #[serde(skip)]
    meta: InstanceMeta,
}

/// Serialized form, validated through [`ContainerElement::new`].
#[derive(Deserialize)]
struct ContainerElementRepr {
    tag_name: String,
    #[serde(default)]
    attributes: Attributes,
    #[serde(default)]
    children: Vec<Node>,
    #[serde(default)]
    rendering: Option<RenderingBehavior>,
}

impl TryFrom<ContainerElementRepr> for ContainerElement {
    type Error = FragmentError;

    fn try_from(repr: ContainerElementRepr) -> FragmentResult<Self> {
        let mut element = ContainerElement::new(repr.tag_name)?;
        element.attributes = repr.attributes;
        element.children = repr.children;
        element.rendering = repr.rendering;
        Ok(element)
    }
}

impl ContainerElement {
    pub fn new(tag_name: impl Into<String>) -> FragmentResult<Self> {
        Ok(ContainerElement {
            tag_name: require_non_empty(tag_name.into(), "ContainerElement", "tag name")?,
            attributes: Attributes::new(),
            children: Vec::new(),
            rendering: None,
            meta: InstanceMeta::new(),
        })
    }

    /// Create an element whose tag is known at compile time.
    pub fn known(tag_name: &'static str) -> Self {
        debug_assert!(!tag_name.is_empty());
        ContainerElement {
            tag_name: tag_name.to_string(),
            attributes: Attributes::new(),
            children: Vec::new(),
            rendering: None,
            meta: InstanceMeta::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Override the default `Block` behavior.
    pub fn with_rendering_behavior(&mut self, behavior: RenderingBehavior) -> &mut Self {
        self.rendering = Some(behavior);
        self
    }

    /// Consume the element, returning its children.
    pub fn into_children(self) -> Vec<Node> {
        self.children
    }
}

impl HasAttributes for ContainerElement {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl HasChildren for ContainerElement {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    fn remove_child(&mut self, index: usize) -> Option<Node> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    fn clear_children(&mut self) {
        self.children.clear();
    }
}

impl HasTimestamp for ContainerElement {
    fn timestamp(&self) -> Option<SystemTime> {
        self.meta.timestamp()
    }

    fn set_timestamp(&mut self, at: SystemTime) {
        self.meta.set_timestamp(at);
    }
}

impl HasCacheKey for ContainerElement {
    fn instance_id(&self) -> Uuid {
        self.meta.id()
    }
}

impl Renderable for ContainerElement {
    fn rendering_behavior(&self) -> RenderingBehavior {
        self.rendering.unwrap_or(RenderingBehavior::Block)
    }
}

/// An element that can never own children, e.g. `<br/>` or `<img/>`.
///
/// A void element may carry an inline text payload. This is how styled
/// text is modelled: a `span` with a `style` attribute and text, which is
/// structurally self-closing and renders inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VoidElementRepr")]
pub struct VoidElement {
    tag_name: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rendering: Option<RenderingBehavior>,
    #[serde(skip)]
    meta: InstanceMeta,
}

#[derive(Deserialize)]
struct VoidElementRepr {
    tag_name: String,
    #[serde(default)]
    attributes: Attributes,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    rendering: Option<RenderingBehavior>,
}

impl TryFrom<VoidElementRepr> for VoidElement {
    type Error = FragmentError;

    fn try_from(repr: VoidElementRepr) -> FragmentResult<Self> {
        let mut element = VoidElement::new(repr.tag_name)?;
        element.attributes = repr.attributes;
        element.text = repr.text;
        element.rendering = repr.rendering;
        Ok(element)
    }
}

impl VoidElement {
    pub fn new(tag_name: impl Into<String>) -> FragmentResult<Self> {
        Ok(VoidElement {
            tag_name: require_non_empty(tag_name.into(), "VoidElement", "tag name")?,
            attributes: Attributes::new(),
            text: None,
            rendering: None,
            meta: InstanceMeta::new(),
        })
    }

    pub fn known(tag_name: &'static str) -> Self {
        debug_assert!(!tag_name.is_empty());
        VoidElement {
            tag_name: tag_name.to_string(),
            attributes: Attributes::new(),
            text: None,
            rendering: None,
            meta: InstanceMeta::new(),
        }
    }

    /// A `span` carrying `content` styled by `style`.
    pub fn styled_text(content: impl Into<String>, style: impl Into<String>) -> Self {
        let mut span = VoidElement::known("span");
        span.attributes.insert("style".to_string(), style.into());
        span.text = Some(content.into());
        span
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// The inline text payload, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn with_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Override the default `Inline` behavior.
    pub fn with_rendering_behavior(&mut self, behavior: RenderingBehavior) -> &mut Self {
        self.rendering = Some(behavior);
        self
    }
}

impl HasAttributes for VoidElement {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

/// The text payload, or an empty string for elements without one.
impl HasText for VoidElement {
    fn text_content(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.text.as_deref().unwrap_or_default())
    }
}

impl HasTimestamp for VoidElement {
    fn timestamp(&self) -> Option<SystemTime> {
        self.meta.timestamp()
    }

    fn set_timestamp(&mut self, at: SystemTime) {
        self.meta.set_timestamp(at);
    }
}

impl HasCacheKey for VoidElement {
    fn instance_id(&self) -> Uuid {
        self.meta.id()
    }
}

impl Renderable for VoidElement {
    fn rendering_behavior(&self) -> RenderingBehavior {
        self.rendering.unwrap_or(RenderingBehavior::Inline)
    }
}

/// A processing instruction such as `<?xml-stylesheet href="a.css"?>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProcessingInstructionRepr")]
pub struct ProcessingInstruction {
    target: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
}

#[derive(Deserialize)]
struct ProcessingInstructionRepr {
    target: String,
    #[serde(default)]
    attributes: Attributes,
}

impl TryFrom<ProcessingInstructionRepr> for ProcessingInstruction {
    type Error = FragmentError;

    fn try_from(repr: ProcessingInstructionRepr) -> FragmentResult<Self> {
        let mut pi = ProcessingInstruction::new(repr.target)?;
        pi.attributes = repr.attributes;
        Ok(pi)
    }
}

impl ProcessingInstruction {
    pub fn new(target: impl Into<String>) -> FragmentResult<Self> {
        Ok(ProcessingInstruction {
            target: require_non_empty(target.into(), "ProcessingInstruction", "target")?,
            attributes: Attributes::new(),
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl HasAttributes for ProcessingInstruction {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl Renderable for ProcessingInstruction {
    fn rendering_behavior(&self) -> RenderingBehavior {
        RenderingBehavior::Inline
    }
}
