/*
 * tree_walk_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Integration tests exercising the tree model the way a serializer does.
 */

use fragtree_types::{
    AttributelessKind, Attribute, CData, Comment, ContainerElement, Doctype, ElementKind,
    HasAttributes, HasChildren, HasClasses, HasStyle, Node, NodeKind, ProcessingInstruction,
    RenderingBehavior, RenderingPolicy, SelfClosingKind, StringNodeKind, Text, VoidElement,
};
use pretty_assertions::assert_eq;
use std::path::Path;

fn load_policy(name: &str) -> RenderingPolicy {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-fixtures")
        .join(name);
    let source = std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read fixture: {}", name));
    RenderingPolicy::from_toml_str(&source).unwrap()
}

fn open_tag(tag: &str, element: ElementKind<'_>) -> String {
    let mut out = format!("<{}", tag);
    for (name, value) in element.attributes().iter() {
        out.push_str(&format!(" {}=\"{}\"", name, value));
    }
    out
}

/// Minimal serializer: one line per node, indented by depth, tagged with
/// the resolved rendering behavior.
fn outline(root: &Node, policy: &RenderingPolicy) -> Vec<String> {
    let mut lines = Vec::new();
    root.walk(|node, depth| {
        let body = match node.kind() {
            NodeKind::AttributelessNode(AttributelessKind::StringNode(s)) => match s {
                StringNodeKind::Text(t) => t.content().to_string(),
                StringNodeKind::Comment(_) | StringNodeKind::CData(_) => {
                    s.text_content().into_owned()
                }
            },
            NodeKind::AttributelessNode(AttributelessKind::Doctype(d)) => {
                format!("<!DOCTYPE {}>", d.name())
            }
            NodeKind::Element(e @ ElementKind::ContainerElement(_)) => {
                format!("{}>", open_tag(e.tag_name(), e))
            }
            NodeKind::Element(
                e @ ElementKind::SelfClosingElement(SelfClosingKind::VoidElement(v)),
            ) => match v.text() {
                Some(text) => {
                    format!("{}>{}</{}>", open_tag(e.tag_name(), e), text, e.tag_name())
                }
                None => format!("{}/>", open_tag(e.tag_name(), e)),
            },
            NodeKind::Element(
                e @ ElementKind::SelfClosingElement(SelfClosingKind::ProcessingInstruction(_)),
            ) => format!("{}?>", open_tag(&format!("?{}", e.tag_name()), e)),
        };
        let mode = match policy.resolve(node) {
            RenderingBehavior::Block => "B",
            RenderingBehavior::Inline => "I",
        };
        lines.push(format!("{}{} {}", "  ".repeat(depth), mode, body));
    });
    lines
}

fn sample_document() -> Node {
    let mut title = ContainerElement::new("h1").unwrap();
    title.add_child(Text::new("Fragments"));

    let mut code = ContainerElement::new("code").unwrap();
    code.add_child(CData::new("a < b"));

    let mut body = ContainerElement::new("div").unwrap();
    body.set_attribute("id", "main")
        .add_class("content")
        .add_child(title)
        .add_child(Comment::new("intro"))
        .add_child(code)
        .add_child(VoidElement::new("br").unwrap())
        .add_child(VoidElement::styled_text("bold", "font-weight: bold"));

    let mut pi = ProcessingInstruction::new("xml-stylesheet").unwrap();
    pi.set_attribute("href", "a.css");

    let mut html = ContainerElement::new("html").unwrap();
    html.add_child(Doctype::html()).add_child(pi).add_child(body);
    Node::from(html)
}

#[test]
fn test_outline_with_default_behavior() {
    let lines = outline(&sample_document(), &RenderingPolicy::new());
    assert_eq!(
        lines,
        vec![
            "B <html>",
            "  B <!DOCTYPE html>",
            "  I <?xml-stylesheet href=\"a.css\"?>",
            "  B <div id=\"main\" class=\"content\">",
            "    B <h1>",
            "      I Fragments",
            "    I <!-- intro -->",
            "    B <code>",
            "      I <![CDATA[a < b]]>",
            "    I <br/>",
            "    I <span style=\"font-weight: bold\">bold</span>",
        ]
    );
}

#[test]
fn test_outline_with_policy_fixture() {
    let policy = load_policy("policy.toml");
    let lines = outline(&sample_document(), &policy);
    assert_eq!(lines[3], "  I <div id=\"main\" class=\"content\">");
    assert_eq!(lines[7], "    I <code>");
    assert_eq!(lines[0], "B <html>");
}

#[test]
fn test_capabilities_compose_on_void_elements() {
    let mut img = VoidElement::new("img").unwrap();
    img.set_attribute("src", "logo.svg")
        .set_style("width", "10px")
        .add_class("logo")
        .set_style("width", "12px");

    assert_eq!(
        img.attributes().iter().collect::<Vec<_>>(),
        vec![("src", "logo.svg"), ("style", "width: 12px"), ("class", "logo")]
    );
}

#[test]
fn test_tree_serde_roundtrip_preserves_structure() {
    let document = sample_document();
    let json = serde_json::to_string(&document).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, document);
    assert_eq!(back.subtree_len(), document.subtree_len());
}

#[test]
fn test_attribute_is_not_a_node() {
    let attribute = Attribute::new("data-x", "1").unwrap();
    assert_eq!(attribute.name(), "data-x");
    assert!(Attribute::new("", "1").is_err());
}
