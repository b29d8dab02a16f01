/*
 * arg.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Conversion of heterogeneous builder arguments into fragments.

use fragtree_types::{
    Attribute, CData, Comment, ContainerElement, Doctype, Fragment, FragmentCollection,
    FragmentResult, Node, ProcessingInstruction, Text, VoidElement,
};

/// A single builder argument after conversion.
///
/// Errors are carried as values so a failed nested builder call can be
/// passed straight into its parent, which then fails in turn.
pub type Arg = FragmentResult<Fragment>;

/// Anything that can be passed as a builder argument.
///
/// Raw strings become [`Text`] nodes. `Vec<T>` and `Option<T>` become
/// fragment collections, which builders flatten in place.
pub trait IntoFragment {
    fn into_fragment(self) -> Arg;
}

impl IntoFragment for Fragment {
    fn into_fragment(self) -> Arg {
        Ok(self)
    }
}

macro_rules! impl_into_fragment {
    ($($type:ty),* $(,)?) => {
        $(
            impl IntoFragment for $type {
                fn into_fragment(self) -> Arg {
                    Ok(Fragment::from(self))
                }
            }
        )*
    };
}

impl_into_fragment!(
    Node,
    Attribute,
    FragmentCollection,
    Text,
    Comment,
    CData,
    Doctype,
    ContainerElement,
    VoidElement,
    ProcessingInstruction,
);

impl IntoFragment for &str {
    fn into_fragment(self) -> Arg {
        Ok(Text::new(self).into())
    }
}

impl IntoFragment for String {
    fn into_fragment(self) -> Arg {
        Ok(Text::new(self).into())
    }
}

impl IntoFragment for &String {
    fn into_fragment(self) -> Arg {
        Ok(Text::new(self.as_str()).into())
    }
}

impl<T: IntoFragment> IntoFragment for FragmentResult<T> {
    fn into_fragment(self) -> Arg {
        self.and_then(IntoFragment::into_fragment)
    }
}

impl<T: IntoFragment> IntoFragment for Vec<T> {
    fn into_fragment(self) -> Arg {
        let fragments = self
            .into_iter()
            .map(IntoFragment::into_fragment)
            .collect::<FragmentResult<Vec<_>>>()?;
        Ok(FragmentCollection::new(fragments).into())
    }
}

impl<T: IntoFragment> IntoFragment for Option<T> {
    fn into_fragment(self) -> Arg {
        match self {
            Some(value) => value.into_fragment(),
            None => Ok(FragmentCollection::default().into()),
        }
    }
}
