//! Shadow DOM
//!
//! Shadow roots and named slot assignment.

use crate::{DomError, DomResult, DomTree, Node, NodeId};

/// Shadow root mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowRootMode {
    #[default]
    Open,
    Closed,
}

impl ShadowRootMode {
    /// Parse a `shadowrootmode` attribute value
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("open") {
            Some(Self::Open)
        } else if value.eq_ignore_ascii_case("closed") {
            Some(Self::Closed)
        } else {
            None
        }
    }
}

/// Shadow root payload
#[derive(Debug, Clone)]
pub struct ShadowRootData {
    /// Host element
    pub host: NodeId,
    /// Mode (open/closed)
    pub mode: ShadowRootMode,
    /// Whether focus is delegated to the first focusable element
    pub delegates_focus: bool,
}

/// Elements allowed to host a shadow root (plus any custom element)
const SHADOW_HOSTS: &[&str] = &[
    "article", "aside", "blockquote", "body", "div", "footer", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "main", "nav", "p", "section", "span",
];

fn can_host_shadow(local_name: &str) -> bool {
    local_name.contains('-') || SHADOW_HOSTS.contains(&local_name)
}

impl DomTree {
    /// Attach a shadow root to `host`
    pub fn attach_shadow(&mut self, host: NodeId, mode: ShadowRootMode) -> DomResult<NodeId> {
        let elem = self.element(host).ok_or(DomError::NotFound)?;
        if !can_host_shadow(&elem.local_name) {
            return Err(DomError::ShadowNotSupported(elem.local_name.clone()));
        }
        if elem.shadow_root.is_some() {
            return Err(DomError::ShadowAlreadyAttached);
        }

        let root = self.push(Node::shadow_root(ShadowRootData {
            host,
            mode,
            delegates_focus: false,
        }));
        if let Some(elem) = self.element_mut(host) {
            elem.shadow_root = Some(root);
        }
        tracing::trace!("Attached {:?} shadow root {:?} to {:?}", mode, root, host);
        Ok(root)
    }

    /// The `shadowRoot` accessor: only open roots are exposed
    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        self.shadow_root_internal(host)
            .filter(|&root| self.shadow_mode(root) == Some(ShadowRootMode::Open))
    }

    /// Shadow root of `host` regardless of mode (embedder access)
    pub fn shadow_root_internal(&self, host: NodeId) -> Option<NodeId> {
        self.element(host).and_then(|e| e.shadow_root)
    }

    /// Host element of a shadow root
    pub fn shadow_host(&self, root: NodeId) -> Option<NodeId> {
        self.get(root).and_then(Node::as_shadow_root).map(|s| s.host)
    }

    /// Mode of a shadow root
    pub fn shadow_mode(&self, root: NodeId) -> Option<ShadowRootMode> {
        self.get(root).and_then(Node::as_shadow_root).map(|s| s.mode)
    }

    fn slot_name(&self, slot: NodeId) -> &str {
        self.get_attribute(slot, "name").unwrap_or("")
    }

    fn slottable_name(&self, node: NodeId) -> &str {
        self.get_attribute(node, "slot").unwrap_or("")
    }

    fn find_slot(&self, root: NodeId, name: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.tag_name(id) == "slot" && self.slot_name(id) == name)
    }

    /// Slot a light-DOM child is rendered into, regardless of mode
    pub(crate) fn find_assigned_slot(&self, node: NodeId) -> Option<NodeId> {
        let host = self.parent_element(node)?;
        let root = self.shadow_root_internal(host)?;
        self.find_slot(root, self.slottable_name(node))
    }

    /// The `assignedSlot` accessor (null for slots in closed trees)
    pub fn assigned_slot(&self, node: NodeId) -> Option<NodeId> {
        self.find_assigned_slot(node).filter(|&slot| {
            self.shadow_mode(self.root_node(slot)) == Some(ShadowRootMode::Open)
        })
    }

    /// Elements assigned to `slot`, in host child order
    pub fn assigned_elements(&self, slot: NodeId) -> Vec<NodeId> {
        if self.tag_name(slot) != "slot" {
            return Vec::new();
        }
        let root = self.root_node(slot);
        let Some(host) = self.shadow_host(root) else {
            return Vec::new();
        };
        let name = self.slot_name(slot);
        // Only the first slot with a given name receives content
        if self.find_slot(root, name) != Some(slot) {
            return Vec::new();
        }
        self.element_children(host)
            .filter(|&child| self.slottable_name(child) == name)
            .collect()
    }
}
