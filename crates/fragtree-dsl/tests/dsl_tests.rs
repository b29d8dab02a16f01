/*
 * dsl_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Integration tests for building documents with the DSL.
 */

use fragtree_dsl::prelude::*;
use fragtree_dsl::{html, svg};
use fragtree_types::{
    Classify, ContainerElement, ElementKind, FragmentError, FragmentKind, HasAttributes,
    HasCacheKey, HasChildren, Node, NodeKind, Text, VoidElement, describe,
};
use pretty_assertions::assert_eq;

fn container(node: &Node) -> &ContainerElement {
    match node.kind() {
        NodeKind::Element(ElementKind::ContainerElement(c)) => c,
        other => panic!("expected a container, got {}", other.leaf_name()),
    }
}

fn summaries(element: &ContainerElement) -> Vec<String> {
    element.children().iter().map(describe::summarize).collect()
}

fn todo_page() -> Result<ContainerElement, FragmentError> {
    let items = ["Write", "Test", "Ship"];
    html(frags![
        head(frags![
            meta(frags![charset("utf-8")]),
            title(frags!["Todo"]),
        ]),
        body(frags![
            header(frags![h1(frags!["Todo"])]),
            html::main(frags![
                id("app"),
                ul(frags![
                    class_name("items"),
                    items
                        .iter()
                        .map(|item| li(frags![*item]))
                        .collect::<Vec<_>>(),
                ]),
                input(frags![type_("text"), placeholder("New item"), name("item")]),
                button(frags![on_click("add()"), "Add"]),
            ]),
            footer(frags![multi_line_texts(["Made with fragments", "2025"])]),
        ]),
    ])
}

#[test]
fn test_document_structure() {
    let page = todo_page().unwrap();
    assert_eq!(
        summaries(&page),
        vec!["Container[head, children=2]", "Container[body, children=3]"]
    );

    let body = container(&page.children()[1]);
    let main = container(&body.children()[1]);
    assert_eq!(main.attribute("id"), Some("app"));
    assert_eq!(
        summaries(main),
        vec![
            "Container[ul, children=3]",
            "Void[input]",
            "Container[button, children=1]",
        ]
    );

    let footer = container(&body.children()[2]);
    assert_eq!(
        summaries(footer),
        vec!["Text[Made with fragments]", "Void[br]", "Text[2025]"]
    );
}

#[test]
fn test_interleaved_attributes_and_children_keep_their_order() {
    let div = build_element(
        "div",
        frags![
            id("a"),
            "one",
            class_name("b"),
            p(frags!["two"]),
            frags(frags![href("c"), "three"]),
            type_("d"),
        ],
    )
    .unwrap();

    assert_eq!(
        div.attributes().names().collect::<Vec<_>>(),
        vec!["id", "class", "href", "type"]
    );
    assert_eq!(
        summaries(&div),
        vec!["Text[one]", "Container[p, children=1]", "Text[three]"]
    );
}

#[test]
fn test_nested_error_fails_whole_tree() {
    let result = div(frags![
        id("outer"),
        section(frags![p(frags![attr("", "oops")])]),
    ]);
    assert!(matches!(
        result,
        Err(FragmentError::MalformedEntity {
            entity: "Attribute",
            field: "name"
        })
    ));
}

#[test]
fn test_doctype_argument_is_rejected() {
    let result = body(frags![fragtree_types::Doctype::html()]);
    assert!(matches!(
        result,
        Err(FragmentError::UnrecognizedFragmentKind { kind: "Doctype" })
    ));
}

#[test]
fn test_identical_calls_build_equal_unaliased_trees() {
    let first = todo_page().unwrap();
    let second = todo_page().unwrap();

    assert_eq!(first, second);
    assert_ne!(first.cache_key(), second.cache_key());
    assert!(!std::ptr::eq(
        first.children().as_ptr(),
        second.children().as_ptr()
    ));
}

#[test]
fn test_optional_arguments() {
    let disabled = true;
    let button = button(frags![
        disabled.then(|| attr("disabled", "disabled")),
        None::<fragtree_types::Attribute>,
        "Go",
    ])
    .unwrap();

    assert_eq!(button.attribute("disabled"), Some("disabled"));
    assert_eq!(button.children(), &[Node::from(Text::new("Go"))]);
}

#[test]
fn test_svg_document() {
    let logo = svg(frags![
        xmlns("http://www.w3.org/2000/svg"),
        view_box(0.0, 0.0, 400.0, 300.0),
        width(400.0),
        height(300.0),
        defs(frags![
            linear_gradient(frags![
                id("bg"),
                stop(frags![offset("0%"), stop_color("#667eea")]),
                stop(frags![offset("100%"), stop_color("#764ba2")]),
            ]),
            svg::filter(frags![
                id("shadow"),
                fe_drop_shadow(frags![dx(2.0), dy(2.0), std_deviation(3.0)]),
            ]),
        ]),
        rect(frags![width(400.0), height(300.0), fill("url(#bg)")]),
        g(frags![
            transform("translate(200, 150)"),
            circle(frags![cx(0.0), cy(0.0), r(50.0), filter("url(#shadow)")]),
            text_svg(0.0, 5.0, "Logo"),
        ]),
    ])
    .unwrap();

    assert_eq!(logo.attribute("viewBox"), Some("0 0 400 300"));
    assert_eq!(
        summaries(&logo),
        vec![
            "Container[defs, children=2]",
            "Void[rect]",
            "Container[g, children=2]",
        ]
    );

    let group = container(&logo.children()[2]);
    assert_eq!(group.children()[0].kind().leaf_name(), "VoidElement");
    let NodeKind::Element(ElementKind::SelfClosingElement(shape)) = group.children()[0].kind()
    else {
        panic!("circle must be self-closing");
    };
    assert_eq!(shape.attributes().get("filter"), Some("url(#shadow)"));
}

#[test]
fn test_styled_text_inside_paragraph() {
    let para = p(frags![
        "Plain ",
        styled_text("bold", "font-weight: bold"),
        " text",
    ])
    .unwrap();

    let span = &para.children()[1];
    match span.fragment_kind() {
        FragmentKind::Node(NodeKind::Element(ElementKind::SelfClosingElement(
            fragtree_types::SelfClosingKind::VoidElement(v),
        ))) => {
            assert_eq!(v.text(), Some("bold"));
            assert_eq!(v.attribute("style"), Some("font-weight: bold"));
        }
        _ => panic!("styled text must be a void element"),
    }
}

#[test]
fn test_void_builder_rejects_nested_children() {
    let result = build_void_element("img", frags![frags(frags![href("a.png"), "caption"])]);
    assert!(matches!(
        result,
        Err(FragmentError::ChildrenForbidden { kind: "Text", .. })
    ));
}

#[test]
fn test_paragraph_and_text_helpers() {
    let para = paragraph(["a", "b"]);
    assert_eq!(summaries(&para), vec!["Text[a]", "Text[b]"]);

    let joined = text(["a", "b"]);
    assert_eq!(joined.content(), "ab");

    let h2 = text_element("h2", ["Title"]).unwrap();
    assert_eq!(summaries(&h2), vec!["Text[Title]"]);

    let br: VoidElement = br(frags![]).unwrap();
    assert!(br.text().is_none());
}
