//! Candidate discovery
//!
//! Walks the flattened tree below one or more roots and records the
//! elements that could be interactive. Shadow hosts and slots become
//! nested [`Entry::Scope`]s so the tab order can be resolved per focus
//! navigation scope.

use std::collections::HashSet;

use crate::focusable::is_inert;
use crate::host::FocusTree;
use crate::shadow::{LogicalChildren, ShadowTraversal};
use crate::tab_index::explicit_tab_index;

/// One discovered item in traversal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Entry<N> {
    Element(N),
    /// Content of a shadow root or slot, owned by the host/slot element
    Scope { owner: N, entries: Vec<Entry<N>> },
}

impl<N: Copy> Entry<N> {
    /// Drop elements rejected by `keep`, recursing into scopes
    pub(crate) fn retain(entries: Vec<Self>, keep: &mut impl FnMut(N) -> bool) -> Vec<Self> {
        entries
            .into_iter()
            .filter_map(|entry| match entry {
                Self::Element(node) => keep(node).then_some(Self::Element(node)),
                Self::Scope { owner, entries } => {
                    let entries = Self::retain(entries, keep);
                    (!entries.is_empty()).then_some(Self::Scope { owner, entries })
                }
            })
            .collect()
    }

    /// Elements in traversal order, scopes expanded in place
    pub(crate) fn flatten(entries: Vec<Self>) -> Vec<N> {
        let mut out = Vec::new();
        Self::flatten_into(entries, &mut out);
        out
    }

    fn flatten_into(entries: Vec<Self>, out: &mut Vec<N>) {
        for entry in entries {
            match entry {
                Self::Element(node) => out.push(node),
                Self::Scope { entries, .. } => Self::flatten_into(entries, out),
            }
        }
    }
}

/// Which public operation the walk serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CollectMode {
    Focusable,
    /// Hosts with a negative `tabindex` keep their shadow tree closed
    Tabbable,
}

/// The "potentially interactive" matching set
pub(crate) fn is_candidate<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> bool {
    if !host.is_element(node) {
        return false;
    }
    match host.tag_name(node) {
        "input" | "select" | "textarea" | "button" | "details" => return true,
        "a" if host.has_attribute(node, "href") => return true,
        "audio" | "video" if host.has_attribute(node, "controls") => return true,
        "summary" if is_first_summary(host, node) => return true,
        "slot" => return false,
        _ => {}
    }
    host.has_attribute(node, "tabindex")
        || host
            .attribute(node, "contenteditable")
            .is_some_and(|value| value != "false")
}

/// The matching set accepted by `is_focusable` (adds `iframe`)
pub(crate) fn is_focusable_candidate<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> bool {
    is_candidate(host, node) || (host.is_element(node) && host.tag_name(node) == "iframe")
}

/// First `summary` child of a `details` parent
pub(crate) fn is_first_summary<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> bool {
    host.parent_element(node)
        .filter(|&parent| host.tag_name(parent) == "details")
        .and_then(|parent| first_child_named(host, parent, "summary"))
        == Some(node)
}

pub(crate) fn first_child_named<H: FocusTree + ?Sized>(host: &H, parent: H::Node, tag: &str) -> Option<H::Node> {
    host.children(parent)
        .into_iter()
        .find(|&child| host.tag_name(child) == tag)
}

/// Flattened-tree walker producing [`Entry`] lists
pub(crate) struct Collector<'h, 'o, 'a, H: FocusTree + ?Sized> {
    host: &'h H,
    shadow: ShadowTraversal<'o, 'a, H::Node>,
    mode: CollectMode,
    seen: HashSet<H::Node>,
}

impl<'h, 'o, 'a, H: FocusTree + ?Sized> Collector<'h, 'o, 'a, H> {
    pub(crate) fn new(host: &'h H, shadow: ShadowTraversal<'o, 'a, H::Node>, mode: CollectMode) -> Self {
        Self {
            host,
            shadow,
            mode,
            seen: HashSet::new(),
        }
    }

    /// Walk every root in order; duplicates keep their first position
    pub(crate) fn collect(mut self, roots: &[H::Node], include_container: bool) -> Vec<Entry<H::Node>> {
        let mut out = Vec::new();
        for &root in roots {
            if is_inert(self.host, root, true) {
                tracing::trace!(root = ?root, "skipping inert root");
                continue;
            }
            if include_container && is_candidate(self.host, root) && self.seen.insert(root) {
                out.push(Entry::Element(root));
            }
            self.expand(root, &mut out);
        }
        out
    }

    fn visit(&mut self, node: H::Node, out: &mut Vec<Entry<H::Node>>) {
        // Inert subtrees are pruned whole
        if is_inert(self.host, node, false) {
            return;
        }
        if is_candidate(self.host, node) && self.seen.insert(node) {
            out.push(Entry::Element(node));
        }
        self.expand(node, out);
    }

    fn expand(&mut self, element: H::Node, out: &mut Vec<Entry<H::Node>>) {
        let expose_shadow = match self.mode {
            CollectMode::Focusable => true,
            CollectMode::Tabbable => explicit_tab_index(self.host, element).is_none_or(|index| index >= 0),
        };
        match self.shadow.logical_children(self.host, element, expose_shadow) {
            LogicalChildren::Light(children) => {
                for child in children {
                    self.visit(child, out);
                }
            }
            LogicalChildren::Shadow(children) | LogicalChildren::Slotted(children) => {
                let mut entries = Vec::new();
                for child in children {
                    self.visit(child, &mut entries);
                }
                out.push(Entry::Scope { owner: element, entries });
            }
        }
    }
}
