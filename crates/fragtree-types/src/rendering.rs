/*
 * rendering.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Block/inline layout hints consulted by serializers.
 */

use crate::error::FragmentResult;
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// How a node wants to be laid out by a serializer.
///
/// This is only a hint: it carries no other state and the tree model never
/// acts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderingBehavior {
    Block,
    Inline,
}

impl RenderingBehavior {
    pub fn is_block(self) -> bool {
        self == RenderingBehavior::Block
    }

    pub fn is_inline(self) -> bool {
        self == RenderingBehavior::Inline
    }
}

/// Implemented by everything that can appear in a tree.
pub trait Renderable {
    fn rendering_behavior(&self) -> RenderingBehavior;
}

/// Per-tag overrides of the rendering behavior a node reports for itself.
///
/// ```toml
/// block = ["pre", "svg"]
/// inline = ["code", "em"]
/// ```
///
/// A tag listed in both tables resolves to `Block`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingPolicy {
    pub block: Vec<String>,
    pub inline: Vec<String>,
}

impl RenderingPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a policy from TOML.
    pub fn from_toml_str(source: &str) -> FragmentResult<Self> {
        let policy: RenderingPolicy = toml::from_str(source)?;
        tracing::debug!(
            block = policy.block.len(),
            inline = policy.inline.len(),
            "Loaded rendering policy"
        );
        Ok(policy)
    }

    /// The forced behavior for a tag, if the policy lists it.
    pub fn behavior_for_tag(&self, tag: &str) -> Option<RenderingBehavior> {
        if self.block.iter().any(|t| t == tag) {
            Some(RenderingBehavior::Block)
        } else if self.inline.iter().any(|t| t == tag) {
            Some(RenderingBehavior::Inline)
        } else {
            None
        }
    }

    /// Resolve the behavior of a node, preferring the policy for elements.
    pub fn resolve(&self, node: &Node) -> RenderingBehavior {
        node.kind()
            .as_element()
            .and_then(|element| self.behavior_for_tag(element.tag_name()))
            .unwrap_or_else(|| node.rendering_behavior())
    }
}
