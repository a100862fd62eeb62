//! Shadow traversal policy
//!
//! Decides whether traversal crosses into a shadow root and resolves
//! `<slot>` elements to the content rendered at their position.

use crate::host::FocusTree;
use crate::options::{ShadowLookup, ShadowRootPolicy};

/// What traversal visits below an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LogicalChildren<N> {
    /// Plain light-DOM children, visited inline
    Light(Vec<N>),
    /// Content of the shadow tree hosted by the element
    Shadow(Vec<N>),
    /// Content distributed into a slot (assigned elements or fallback)
    Slotted(Vec<N>),
}

#[derive(Clone, Copy)]
pub(crate) struct ShadowTraversal<'o, 'a, N> {
    policy: &'o ShadowRootPolicy<'a, N>,
}

impl<'o, 'a, N: Copy> ShadowTraversal<'o, 'a, N> {
    pub(crate) fn new(policy: &'o ShadowRootPolicy<'a, N>) -> Self {
        Self { policy }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.policy.is_enabled()
    }

    /// Whether a custom accessor is installed
    pub(crate) fn is_custom(&self) -> bool {
        matches!(self.policy, ShadowRootPolicy::Custom(_))
    }

    /// Shadow root of `element` as seen by the configured policy
    pub(crate) fn lookup<H>(&self, host: &H, element: N) -> ShadowLookup<N>
    where
        H: FocusTree<Node = N> + ?Sized,
    {
        match self.policy {
            ShadowRootPolicy::Disabled => ShadowLookup::Absent,
            ShadowRootPolicy::Open => host
                .open_shadow_root(element)
                .map_or(ShadowLookup::Absent, ShadowLookup::Attached),
            ShadowRootPolicy::Custom(accessor) => host
                .open_shadow_root(element)
                .map_or_else(|| accessor(element), ShadowLookup::Attached),
        }
    }

    /// Children of `element` in the flattened tree
    ///
    /// `expose_shadow` lets callers keep a shadow tree closed (its light
    /// children are visited instead).
    pub(crate) fn logical_children<H>(&self, host: &H, element: N, expose_shadow: bool) -> LogicalChildren<N>
    where
        H: FocusTree<Node = N> + ?Sized,
    {
        if !self.is_enabled() {
            return LogicalChildren::Light(host.children(element));
        }
        if host.tag_name(element) == "slot" {
            let assigned = host.assigned_elements(element);
            return LogicalChildren::Slotted(if assigned.is_empty() {
                host.children(element)
            } else {
                assigned
            });
        }
        if expose_shadow {
            match self.lookup(host, element) {
                ShadowLookup::Attached(root) => return LogicalChildren::Shadow(host.children(root)),
                ShadowLookup::Undisclosed => return LogicalChildren::Shadow(host.children(element)),
                ShadowLookup::Absent => {}
            }
        }
        LogicalChildren::Light(host.children(element))
    }
}
