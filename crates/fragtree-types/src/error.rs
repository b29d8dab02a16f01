/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for fragment construction and configuration.

use thiserror::Error;

/// Errors that can occur while constructing fragments or trees.
///
/// Every variant is a caller-side contract violation. None of them is
/// transient, so nothing here is worth retrying.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// A builder argument has a kind the builder cannot place in a tree.
    #[error("Unrecognized fragment kind: {kind}")]
    UnrecognizedFragmentKind { kind: &'static str },

    /// A node was passed to a builder for an element that cannot own children.
    #[error("Element <{tag}> cannot own children (got {kind})")]
    ChildrenForbidden { tag: String, kind: &'static str },

    /// An entity was constructed with an empty name, tag or target.
    #[error("Malformed {entity}: {field} must not be empty")]
    MalformedEntity {
        entity: &'static str,
        field: &'static str,
    },

    /// A rendering policy could not be parsed.
    #[error("Invalid rendering policy: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}

/// Result type for fragment operations.
pub type FragmentResult<T> = Result<T, FragmentError>;

/// Reject empty names eagerly so invalid entities never enter a tree.
pub(crate) fn require_non_empty(
    value: String,
    entity: &'static str,
    field: &'static str,
) -> FragmentResult<String> {
    if value.is_empty() {
        Err(FragmentError::MalformedEntity { entity, field })
    } else {
        Ok(value)
    }
}
