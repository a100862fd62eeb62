//! Host ports for `fos_dom::Document`

use fos_dom::{ComputedStyle, DOMRect, Display, Document, NodeId, SelectorError};

use crate::host::{FocusTree, LayoutOracle, SelectorQuery};

impl FocusTree for Document {
    type Node = NodeId;

    fn is_element(&self, node: NodeId) -> bool {
        self.tree.is_element(node)
    }

    fn tag_name(&self, node: NodeId) -> &str {
        self.tree.tag_name(node)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree.get_attribute(node, name)
    }

    fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        self.tree.parent_element(node)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree.element_children(node).collect()
    }

    fn root_node(&self, node: NodeId) -> NodeId {
        self.tree.root_node(node)
    }

    fn shadow_host(&self, node: NodeId) -> Option<NodeId> {
        self.tree.shadow_host(node)
    }

    fn open_shadow_root(&self, node: NodeId) -> Option<NodeId> {
        self.tree.shadow_root(node)
    }

    fn assigned_slot(&self, node: NodeId) -> Option<NodeId> {
        self.tree.assigned_slot(node)
    }

    fn assigned_elements(&self, slot: NodeId) -> Vec<NodeId> {
        self.tree.assigned_elements(slot)
    }

    fn is_connected(&self, node: NodeId) -> bool {
        self.tree.is_connected(node)
    }

    fn is_disabled(&self, node: NodeId) -> bool {
        self.tree.is_disabled(node)
    }

    fn is_checked(&self, node: NodeId) -> bool {
        self.tree.is_checked(node)
    }

    fn form_owner(&self, node: NodeId) -> Option<NodeId> {
        self.tree.form_owner(node)
    }

    fn native_tab_index(&self, node: NodeId) -> i32 {
        self.tree.tab_index(node)
    }
}

impl LayoutOracle for Document {
    fn computed_style(&self, node: NodeId) -> ComputedStyle {
        self.tree.computed_style(node)
    }

    fn display(&self, node: NodeId) -> Display {
        self.tree.display(node)
    }

    fn client_rects(&self, node: NodeId) -> Vec<DOMRect> {
        self.tree.client_rects(node)
    }

    fn bounding_client_rect(&self, node: NodeId) -> DOMRect {
        self.tree.bounding_client_rect(node)
    }
}

impl SelectorQuery for Document {
    fn css_escape(&self, value: &str) -> Option<String> {
        Document::css_escape(self, value)
    }

    fn query_selector_all(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        self.tree.query_selector_all(scope, selector)
    }
}
