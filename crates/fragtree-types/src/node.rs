/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Owned tree values: [`Node`], [`Fragment`] and the transient
//! [`FragmentCollection`].

use crate::attr::Attribute;
use crate::capability::HasChildren;
use crate::element::{ContainerElement, ProcessingInstruction, VoidElement};
use crate::rendering::{Renderable, RenderingBehavior};
use crate::text::{CData, Comment, Doctype, Text};
use serde::{Deserialize, Serialize};

/// A tree-participating fragment.
///
/// The owned representation is flat; the hierarchy (string node, element,
/// self-closing element, ...) is exposed through [`Node::kind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Text(Text),
    Comment(Comment),
    CData(CData),
    Doctype(Doctype),
    Container(ContainerElement),
    Void(VoidElement),
    ProcessingInstruction(ProcessingInstruction),
}

/// Any constituent of a tree under construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
    Attribute(Attribute),
    Node(Node),
    Collection(FragmentCollection),
}

/// A grouping of fragments passed through a single builder argument.
///
/// Collections never become tree members: builders flatten them, recursively,
/// into their attributes and nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentCollection {
    fragments: Vec<Fragment>,
}

/// A fragment after flattening: never a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatFragment {
    Attribute(Attribute),
    Node(Node),
}

impl Node {
    /// Visit this node and all its descendants, depth-first in document
    /// order. The callback receives each node with its depth (root = 0).
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&'a Node, usize)) {
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            if let Node::Container(container) = node {
                stack.extend(container.children().iter().rev().map(|c| (c, depth + 1)));
            }
        }
    }

    /// Number of nodes in the subtree rooted here, including this one.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }
}

impl Renderable for Node {
    fn rendering_behavior(&self) -> RenderingBehavior {
        match self {
            Node::Text(n) => n.rendering_behavior(),
            Node::Comment(n) => n.rendering_behavior(),
            Node::CData(n) => n.rendering_behavior(),
            Node::Doctype(n) => n.rendering_behavior(),
            Node::Container(n) => n.rendering_behavior(),
            Node::Void(n) => n.rendering_behavior(),
            Node::ProcessingInstruction(n) => n.rendering_behavior(),
        }
    }
}

impl Fragment {
    /// Flatten this fragment into attributes and nodes, in order.
    pub fn flatten(self) -> Flatten {
        Flatten {
            stack: vec![vec![self].into_iter()],
        }
    }
}

impl FragmentCollection {
    pub fn new(fragments: impl IntoIterator<Item = Fragment>) -> Self {
        FragmentCollection {
            fragments: fragments.into_iter().collect(),
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn push(&mut self, fragment: impl Into<Fragment>) {
        self.fragments.push(fragment.into());
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Flatten nested collections, preserving left-to-right order.
    ///
    /// Nesting depth is unbounded; the traversal uses an explicit stack.
    pub fn flatten(self) -> Flatten {
        Flatten {
            stack: vec![self.fragments.into_iter()],
        }
    }
}

impl IntoIterator for FragmentCollection {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl FromIterator<Fragment> for FragmentCollection {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        FragmentCollection::new(iter)
    }
}

/// Iterator returned by [`FragmentCollection::flatten`] and
/// [`Fragment::flatten`].
#[derive(Debug)]
pub struct Flatten {
    stack: Vec<std::vec::IntoIter<Fragment>>,
}

impl Iterator for Flatten {
    type Item = FlatFragment;

    fn next(&mut self) -> Option<FlatFragment> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Fragment::Attribute(attribute)) => {
                    return Some(FlatFragment::Attribute(attribute));
                }
                Some(Fragment::Node(node)) => return Some(FlatFragment::Node(node)),
                Some(Fragment::Collection(inner)) => self.stack.push(inner.fragments.into_iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl From<FlatFragment> for Fragment {
    fn from(flat: FlatFragment) -> Self {
        match flat {
            FlatFragment::Attribute(a) => Fragment::Attribute(a),
            FlatFragment::Node(n) => Fragment::Node(n),
        }
    }
}

macro_rules! impl_into_node {
    ($($type:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$type> for Node {
                fn from(value: $type) -> Self {
                    Node::$variant(value)
                }
            }

            impl From<$type> for Fragment {
                fn from(value: $type) -> Self {
                    Fragment::Node(Node::$variant(value))
                }
            }
        )*
    };
}

impl_into_node!(
    Text => Text,
    Comment => Comment,
    CData => CData,
    Doctype => Doctype,
    ContainerElement => Container,
    VoidElement => Void,
    ProcessingInstruction => ProcessingInstruction,
);

impl From<Node> for Fragment {
    fn from(node: Node) -> Self {
        Fragment::Node(node)
    }
}

impl From<Attribute> for Fragment {
    fn from(attribute: Attribute) -> Self {
        Fragment::Attribute(attribute)
    }
}

impl From<FragmentCollection> for Fragment {
    fn from(collection: FragmentCollection) -> Self {
        Fragment::Collection(collection)
    }
}
