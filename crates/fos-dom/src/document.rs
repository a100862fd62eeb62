//! Document - High-level document API

use crate::{DomTree, NodeId, css_escape};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Whether `CSS.escape` exists in this environment
    css_escape_supported: bool,
}

impl Document {
    /// Create a document with an html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut doc = Self::empty(url);
        let tree = &mut doc.tree;
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Freshly created nodes under the document cannot violate hierarchy rules
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        doc.html_element = html;
        doc.head_element = head;
        doc.body_element = body;
        doc
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            css_escape_supported: true,
        }
    }

    /// Locate html/head/body after the tree was built externally
    pub fn finalize(&mut self) {
        let tree = &self.tree;
        let html = tree
            .element_children(tree.root())
            .find(|&id| tree.tag_name(id) == "html")
            .unwrap_or(NodeId::NONE);
        let child = |tag: &str| {
            tree.element_children(html)
                .find(|&id| tree.tag_name(id) == tag)
                .unwrap_or(NodeId::NONE)
        };
        self.head_element = child("head");
        self.body_element = child("body");
        self.html_element = html;
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Find an element by `id`, searching shadow trees as well
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut scopes = vec![self.tree.root()];
        while let Some(scope) = scopes.pop() {
            for node in self.tree.descendants(scope) {
                if self.tree.get_attribute(node, "id") == Some(id) {
                    return Some(node);
                }
                scopes.extend(self.tree.shadow_root_internal(node));
            }
        }
        None
    }

    /// `CSS.escape`, or `None` when the environment lacks it
    pub fn css_escape(&self, value: &str) -> Option<String> {
        self.css_escape_supported.then(|| css_escape(value))
    }

    /// Emulate an environment with or without `CSS.escape`
    pub fn set_css_escape_supported(&mut self, supported: bool) {
        self.css_escape_supported = supported;
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
