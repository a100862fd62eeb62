//! HTML5 Parser implementation
//!
//! Uses html5ever's build-in RcDom and converts to our DOM format.
//! This is simpler and more reliable than implementing TreeSink directly.

use crate::ParseError;
use fos_dom::{Document, DomTree, NodeId, ShadowRootMode};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty(url);
        self.convert_node(&dom.document, document.tree_mut(), NodeId::ROOT)?;
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Convert an RcDom node to our DOM format
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), ParseError> {
        match &handle.data {
            RcNodeData::Document => {
                self.convert_children(handle, tree, parent)?;
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if !text.trim().is_empty() {
                    let id = tree.create_text(&text);
                    tree.append_child(parent, id)?;
                }
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Element { name, attrs, template_contents, .. } => {
                let attrs = attrs.borrow();

                if &*name.local == "template" {
                    let mode = attrs
                        .iter()
                        .find(|a| &*a.name.local == "shadowrootmode")
                        .and_then(|a| ShadowRootMode::parse(&a.value));
                    if let (Some(mode), Some(contents)) = (mode, template_contents.borrow().as_ref()) {
                        if let Some(root) = self.attach_declarative_shadow(tree, parent, mode) {
                            return self.convert_children(contents, tree, root);
                        }
                    }
                }

                let id = tree.create_element(&name.local);
                for attr in attrs.iter() {
                    tree.set_attribute(id, &attr.name.local, &attr.value)?;
                }
                tree.append_child(parent, id)?;

                // Template contents are inert and stay out of the tree
                if &*name.local != "template" {
                    self.convert_children(handle, tree, id)?;
                }
            }
            RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => {}
        }
        Ok(())
    }

    fn convert_children(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), ParseError> {
        for child in handle.children.borrow().iter() {
            self.convert_node(child, tree, parent)?;
        }
        Ok(())
    }

    /// Attach a declarative shadow root; falls back to a plain template
    /// when the parent cannot host one
    fn attach_declarative_shadow(&self, tree: &mut DomTree, parent: NodeId, mode: ShadowRootMode) -> Option<NodeId> {
        match tree.attach_shadow(parent, mode) {
            Ok(root) => Some(root),
            Err(err) => {
                tracing::debug!("Ignoring declarative shadow root: {}", err);
                None
            }
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html).unwrap();

        assert!(doc.tree().len() > 1, "Expected more than 1 node, got {}", doc.tree().len());
        assert_eq!(doc.tree().tag_name(doc.body()), "body");
    }

    #[test]
    fn test_parse_fragment() {
        let html = "<div><span>Text</span></div>";
        let doc = HtmlParser::new().parse(html).unwrap();

        // Even fragments get wrapped in html/head/body by html5ever
        let first = doc.tree().element_children(doc.body()).next().unwrap();
        assert_eq!(doc.tree().tag_name(first), "div");
    }

    #[test]
    fn test_declarative_shadow_root() {
        let html = r#"<div id="host"><template shadowrootmode="open"><button id="inner">x</button></template><span id="light"></span></div>"#;
        let doc = HtmlParser::new().parse(html).unwrap();
        let tree = doc.tree();

        let host = doc.element_by_id("host").unwrap();
        let root = tree.shadow_root(host).unwrap();
        let inner = doc.element_by_id("inner").unwrap();
        assert_eq!(tree.root_node(inner), root);

        let light: Vec<_> = tree.element_children(host).collect();
        assert_eq!(light, vec![doc.element_by_id("light").unwrap()]);
    }
}
