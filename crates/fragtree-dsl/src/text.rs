/*
 * text.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Text-oriented factories and fragment grouping.

use crate::arg::Arg;
use fragtree_types::{
    ContainerElement, FragmentCollection, FragmentResult, HasChildren, Text, VoidElement,
};

/// A single text node holding the concatenation of `parts`.
pub fn text<S: AsRef<str>>(parts: impl IntoIterator<Item = S>) -> Text {
    Text::new(parts.into_iter().fold(String::new(), |mut acc, part| {
        acc.push_str(part.as_ref());
        acc
    }))
}

/// A container whose children are one text node per string, in order,
/// with no separator inserted.
pub fn text_element<S: Into<String>>(
    tag: &str,
    strings: impl IntoIterator<Item = S>,
) -> FragmentResult<ContainerElement> {
    let mut element = ContainerElement::new(tag)?;
    push_texts(&mut element, strings);
    Ok(element)
}

/// A `p` element with one text child per string.
pub fn paragraph<S: Into<String>>(strings: impl IntoIterator<Item = S>) -> ContainerElement {
    let mut element = ContainerElement::known("p");
    push_texts(&mut element, strings);
    element
}

/// An inline `span` carrying `content`, styled by `style`.
pub fn styled_text(content: impl Into<String>, style: impl Into<String>) -> VoidElement {
    VoidElement::styled_text(content, style)
}

/// Lines separated by `br` elements: `text, br, text, ..., text`.
///
/// `n` lines yield `2n - 1` fragments; there is never a trailing break and
/// no lines yield an empty collection.
pub fn multi_line_texts<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> FragmentCollection {
    let mut collection = FragmentCollection::default();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            collection.push(VoidElement::known("br"));
        }
        collection.push(Text::new(line));
    }
    collection
}

/// Group arguments into a single collection argument.
///
/// Fails with the first failing argument.
pub fn frags(args: impl IntoIterator<Item = Arg>) -> FragmentResult<FragmentCollection> {
    args.into_iter().collect()
}

pub(crate) fn push_texts<S: Into<String>>(
    element: &mut ContainerElement,
    strings: impl IntoIterator<Item = S>,
) {
    for s in strings {
        element.add_child(Text::new(s));
    }
}
