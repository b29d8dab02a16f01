/*
 * builder.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Assembly of elements from mixed argument lists.
//!
//! Each argument is classified by kind: attributes merge into the attribute
//! map, nodes append to the child list, and fragment collections are
//! flattened in place, to any depth. Attribute order and child order each
//! follow argument order, and the two may be freely interleaved.

use crate::arg::Arg;
use fragtree_types::{
    AttributelessKind, ContainerElement, FlatFragment, Fragment, FragmentError,
    FragmentResult, HasAttributes, HasChildren, Node, NodeKind, VoidElement,
};

/// Build a container element named `tag` from `args`.
///
/// Fails on an empty tag, on any argument that is itself an error, and on
/// nodes that cannot be children (a `Doctype`). On failure no element is
/// returned.
pub fn build_element(
    tag: &str,
    args: impl IntoIterator<Item = Arg>,
) -> FragmentResult<ContainerElement> {
    let element = ContainerElement::new(tag)?;
    populate_container(element, args)
}

/// Build a void element named `tag`. Only attributes are accepted.
pub fn build_void_element(
    tag: &str,
    args: impl IntoIterator<Item = Arg>,
) -> FragmentResult<VoidElement> {
    let element = VoidElement::new(tag)?;
    populate_void(element, args)
}

/// Fill an already constructed container with `args`.
pub(crate) fn populate_container(
    mut element: ContainerElement,
    args: impl IntoIterator<Item = Arg>,
) -> FragmentResult<ContainerElement> {
    for flat in flatten_args(element.tag_name(), args)? {
        match flat {
            FlatFragment::Attribute(attribute) => {
                let (name, value) = attribute.into_parts();
                element.set_attribute(name, value);
            }
            FlatFragment::Node(node) => {
                check_child(element.tag_name(), &node)?;
                element.push_child(node);
            }
        }
    }

    tracing::debug!(
        tag = element.tag_name(),
        attributes = element.attributes().len(),
        children = element.children().len(),
        "Built container element"
    );
    Ok(element)
}

pub(crate) fn populate_void(
    mut element: VoidElement,
    args: impl IntoIterator<Item = Arg>,
) -> FragmentResult<VoidElement> {
    for flat in flatten_args(element.tag_name(), args)? {
        match flat {
            FlatFragment::Attribute(attribute) => {
                let (name, value) = attribute.into_parts();
                element.set_attribute(name, value);
            }
            FlatFragment::Node(node) => {
                let kind = node.kind().leaf_name();
                tracing::debug!(tag = element.tag_name(), kind, "Rejected child of void element");
                return Err(FragmentError::ChildrenForbidden {
                    tag: element.tag_name().to_string(),
                    kind,
                });
            }
        }
    }

    tracing::debug!(
        tag = element.tag_name(),
        attributes = element.attributes().len(),
        "Built void element"
    );
    Ok(element)
}

/// Convert every argument, stopping at the first error, then flatten.
fn flatten_args(
    tag: &str,
    args: impl IntoIterator<Item = Arg>,
) -> FragmentResult<Vec<FlatFragment>> {
    let mut flat = Vec::new();
    for arg in args {
        let fragment = arg.inspect_err(|err| {
            tracing::debug!(tag, error = %err, "Builder argument failed");
        })?;
        if let Fragment::Collection(collection) = &fragment {
            tracing::trace!(tag, fragments = collection.len(), "Flattening fragment collection");
        }
        flat.extend(fragment.flatten());
    }
    Ok(flat)
}

/// Decide whether `node` may be placed in a container's child list.
fn check_child(tag: &str, node: &Node) -> FragmentResult<()> {
    match node.kind() {
        NodeKind::AttributelessNode(AttributelessKind::StringNode(_)) | NodeKind::Element(_) => {
            Ok(())
        }
        NodeKind::AttributelessNode(AttributelessKind::Doctype(_)) => {
            let kind = node.kind().leaf_name();
            tracing::debug!(tag, kind, "Rejected builder argument");
            Err(FragmentError::UnrecognizedFragmentKind { kind })
        }
    }
}
