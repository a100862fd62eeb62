//! Edge case tests for fos-html
//!
//! Conversion of markup into fos-dom documents: attributes, templates,
//! declarative shadow roots and slot distribution.

use fos_html::{HtmlParser, parse};

// ============================================================================
// MINIMAL AND MALFORMED INPUT
// ============================================================================

#[test]
fn test_parse_only_whitespace() {
    let doc = parse("   \t\n\r\n   ").unwrap();
    assert!(doc.body().is_valid());
}

#[test]
fn test_parse_unclosed_tags() {
    let doc = parse("<div id=outer><p><button id=b>text").unwrap();
    let button = doc.element_by_id("b").unwrap();
    assert!(doc.tree().is_connected(button));
}

#[test]
fn test_parse_with_url() {
    let doc = HtmlParser::new().parse_with_url("<p>x</p>", "https://example.com/").unwrap();
    assert_eq!(doc.url(), "https://example.com/");
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

#[test]
fn test_parse_attribute_no_value() {
    let doc = parse("<input id=i disabled>").unwrap();
    let input = doc.element_by_id("i").unwrap();
    assert_eq!(doc.tree().get_attribute(input, "disabled"), Some(""));
    assert!(doc.tree().is_disabled(input));
}

#[test]
fn test_parse_attribute_names_lowercased() {
    let doc = parse(r#"<div ID="x" TabIndex="2"></div>"#).unwrap();
    let div = doc.element_by_id("x").unwrap();
    assert_eq!(doc.tree().get_attribute(div, "tabindex"), Some("2"));
    assert_eq!(doc.tree().tab_index(div), 2);
}

#[test]
fn test_parse_inline_style() {
    let doc = parse(r#"<button id=b style="display: none">x</button>"#).unwrap();
    let button = doc.element_by_id("b").unwrap();
    assert!(doc.tree().client_rects(button).is_empty());
}

// ============================================================================
// TEMPLATES AND SHADOW ROOTS
// ============================================================================

#[test]
fn test_plain_template_contents_are_inert() {
    let doc = parse(r#"<template id=t><button id=inside>x</button></template>"#).unwrap();
    assert!(doc.element_by_id("t").is_some());
    assert!(doc.element_by_id("inside").is_none());
}

#[test]
fn test_closed_declarative_shadow_root() {
    let html = r##"<div id=host><template shadowrootmode="closed"><a id=inner href="#">x</a></template></div>"##;
    let doc = parse(html).unwrap();
    let tree = doc.tree();
    let host = doc.element_by_id("host").unwrap();

    assert!(tree.shadow_root(host).is_none());
    let root = tree.shadow_root_internal(host).unwrap();
    assert_eq!(tree.root_node(doc.element_by_id("inner").unwrap()), root);
}

#[test]
fn test_shadow_root_on_unsupported_host_stays_template() {
    let html = r#"<button id=host><template shadowrootmode="open"><span>x</span></template></button>"#;
    let doc = parse(html).unwrap();
    let host = doc.element_by_id("host").unwrap();

    assert!(doc.tree().shadow_root_internal(host).is_none());
    let kids: Vec<_> = doc.tree().element_children(host).collect();
    assert_eq!(doc.tree().tag_name(kids[0]), "template");
}

#[test]
fn test_slot_distribution() {
    let html = r#"
        <div id=host>
            <template shadowrootmode="open">
                <slot name="a" id="slot-a"></slot>
                <slot id="slot-default"></slot>
            </template>
            <button id=first>1</button>
            <button id=second slot="a">2</button>
        </div>
    "#;
    let doc = parse(html).unwrap();
    let tree = doc.tree();
    let id = |name: &str| doc.element_by_id(name).unwrap();

    assert_eq!(tree.assigned_elements(id("slot-a")), vec![id("second")]);
    assert_eq!(tree.assigned_elements(id("slot-default")), vec![id("first")]);
    assert_eq!(tree.assigned_slot(id("first")), Some(id("slot-default")));
}

#[test]
fn test_nested_shadow_roots() {
    let html = r#"
        <div id=outer>
            <template shadowrootmode="open">
                <div id=inner-host>
                    <template shadowrootmode="open"><input id=deep></template>
                </div>
            </template>
        </div>
    "#;
    let doc = parse(html).unwrap();
    let deep = doc.element_by_id("deep").unwrap();

    assert!(doc.tree().is_connected(deep));
    let inner_host = doc.element_by_id("inner-host").unwrap();
    assert_eq!(doc.tree().shadow_host(doc.tree().root_node(deep)), Some(inner_host));
}
