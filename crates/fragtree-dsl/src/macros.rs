/*
 * macros.rs
 * Copyright (c) 2025 Posit, PBC
 */

/// Build a builder argument list from heterogeneous values.
///
/// Each value is converted with [`IntoFragment`](crate::IntoFragment):
/// attributes, nodes, entities, raw strings, collections, and the results
/// of nested builder calls can all be mixed.
///
/// ```
/// use fragtree_dsl::{frags, multi_line_texts};
/// use fragtree_dsl::html::{p, ul, li};
/// use fragtree_dsl::attributes::class_name;
/// use fragtree_types::HasChildren;
///
/// let list = ul(frags![
///     class_name("items"),
///     li(frags!["one"]),
///     vec![li(frags!["two"]), li(frags!["three"])],
/// ])?;
/// assert_eq!(list.children().len(), 3);
///
/// let lines = p(frags![multi_line_texts(["a", "b"])])?;
/// assert_eq!(lines.children().len(), 3);
/// # Ok::<(), fragtree_types::FragmentError>(())
/// ```
#[macro_export]
macro_rules! frags {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::IntoFragment::into_fragment($arg)),+]
    };
}

/// Define container element factories with fixed tags.
macro_rules! container_factories {
    ($($(#[$doc:meta])* $name:ident => $tag:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(
                args: impl IntoIterator<Item = $crate::Arg>,
            ) -> fragtree_types::FragmentResult<fragtree_types::ContainerElement> {
                $crate::builder::populate_container(
                    fragtree_types::ContainerElement::known($tag),
                    args,
                )
            }
        )*
    };
}

/// Define void element factories with fixed tags.
macro_rules! void_factories {
    ($($(#[$doc:meta])* $name:ident => $tag:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(
                args: impl IntoIterator<Item = $crate::Arg>,
            ) -> fragtree_types::FragmentResult<fragtree_types::VoidElement> {
                $crate::builder::populate_void(fragtree_types::VoidElement::known($tag), args)
            }
        )*
    };
}

/// Define attribute factories taking a string value.
macro_rules! string_attributes {
    ($($(#[$doc:meta])* $name:ident => $attr:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(value: impl Into<String>) -> fragtree_types::Attribute {
                fragtree_types::Attribute::known($attr, value)
            }
        )*
    };
}

/// Define attribute factories taking a number.
macro_rules! numeric_attributes {
    ($($(#[$doc:meta])* $name:ident => $attr:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(value: f64) -> fragtree_types::Attribute {
                fragtree_types::Attribute::known($attr, value.to_string())
            }
        )*
    };
}

pub(crate) use {container_factories, numeric_attributes, string_attributes, void_factories};
