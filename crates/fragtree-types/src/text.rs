/*
 * text.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Attributeless nodes: the string nodes (text, comment, character data)
//! and the document type declaration.

use crate::capability::HasText;
use crate::error::{FragmentError, FragmentResult, require_non_empty};
use crate::rendering::{Renderable, RenderingBehavior};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Raw character content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Text {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A comment. Its text content is the payload wrapped in comment delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    comment: String,
}

impl Comment {
    pub fn new(comment: impl Into<String>) -> Self {
        Comment {
            comment: comment.into(),
        }
    }

    /// The comment body without delimiters.
    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// A character-data block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CData {
    data: String,
}

impl CData {
    pub fn new(data: impl Into<String>) -> Self {
        CData { data: data.into() }
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

/// A document type declaration such as `<!DOCTYPE html>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DoctypeRepr")]
pub struct Doctype {
    name: String,
}

#[derive(Deserialize)]
struct DoctypeRepr {
    name: String,
}

impl TryFrom<DoctypeRepr> for Doctype {
    type Error = FragmentError;

    fn try_from(repr: DoctypeRepr) -> FragmentResult<Self> {
        Doctype::new(repr.name)
    }
}

impl Doctype {
    pub fn new(name: impl Into<String>) -> FragmentResult<Self> {
        Ok(Doctype {
            name: require_non_empty(name.into(), "Doctype", "name")?,
        })
    }

    pub fn html() -> Self {
        Doctype {
            name: "html".to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl HasText for Text {
    fn text_content(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.content)
    }
}

impl HasText for Comment {
    fn text_content(&self) -> Cow<'_, str> {
        Cow::Owned(format!("<!-- {} -->", self.comment))
    }
}

impl HasText for CData {
    fn text_content(&self) -> Cow<'_, str> {
        Cow::Owned(format!("<![CDATA[{}]]>", self.data))
    }
}

impl Renderable for Text {
    fn rendering_behavior(&self) -> RenderingBehavior {
        RenderingBehavior::Inline
    }
}

impl Renderable for Comment {
    fn rendering_behavior(&self) -> RenderingBehavior {
        RenderingBehavior::Inline
    }
}

impl Renderable for CData {
    fn rendering_behavior(&self) -> RenderingBehavior {
        RenderingBehavior::Inline
    }
}

impl Renderable for Doctype {
    fn rendering_behavior(&self) -> RenderingBehavior {
        RenderingBehavior::Block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_is_raw() {
        let text = Text::new("a < b");
        assert_eq!(text.text_content(), "a < b");
        assert!(matches!(text.text_content(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_comment_is_delimited() {
        let comment = Comment::new("note");
        assert_eq!(comment.comment(), "note");
        assert_eq!(comment.text_content(), "<!-- note -->");
    }

    #[test]
    fn test_cdata_is_wrapped() {
        let cdata = CData::new("x < y");
        assert_eq!(cdata.data(), "x < y");
        assert_eq!(cdata.text_content(), "<![CDATA[x < y]]>");
    }

    #[test]
    fn test_doctype_requires_name() {
        assert!(Doctype::new("").is_err());
        assert_eq!(Doctype::new("svg").unwrap().name(), "svg");
        assert_eq!(Doctype::html().name(), "html");
    }

    #[test]
    fn test_doctype_deserialize_requires_name() {
        assert!(serde_json::from_str::<Doctype>(r#"{"name": ""}"#).is_err());
        let doctype: Doctype = serde_json::from_str(r#"{"name": "html"}"#).unwrap();
        assert_eq!(doctype, Doctype::html());
    }

    #[test]
    fn test_string_nodes_are_inline() {
        assert_eq!(Text::new("t").rendering_behavior(), RenderingBehavior::Inline);
        assert_eq!(Comment::new("c").rendering_behavior(), RenderingBehavior::Inline);
        assert_eq!(CData::new("d").rendering_behavior(), RenderingBehavior::Inline);
        assert_eq!(Doctype::html().rendering_behavior(), RenderingBehavior::Block);
    }
}
