//! Visibility oracle
//!
//! The only component that queries computed style or geometry. Holds a
//! per-call memo of "inside a `display: none` subtree" answers; it is
//! created for one top-level call and dropped with it.

use std::collections::HashMap;
use std::hash::Hash;

use fos_dom::{Display, Visibility};

use crate::host::{FocusHost, LayoutOracle, composed_parent};
use crate::options::{DisplayCheck, ShadowLookup};
use crate::shadow::ShadowTraversal;

pub(crate) struct VisibilityOracle<'o, 'a, N> {
    check: DisplayCheck,
    shadow: ShadowTraversal<'o, 'a, N>,
    display_none: HashMap<N, bool>,
}

impl<'o, 'a, N: Copy + Eq + Hash> VisibilityOracle<'o, 'a, N> {
    pub(crate) fn new(check: DisplayCheck, shadow: ShadowTraversal<'o, 'a, N>) -> Self {
        Self {
            check,
            shadow,
            display_none: HashMap::new(),
        }
    }

    /// Whether `node` is hidden under the configured strategy
    pub(crate) fn is_hidden<H>(&mut self, host: &H, node: N) -> bool
    where
        H: FocusHost<Node = N> + ?Sized,
    {
        match self.check {
            DisplayCheck::None => false,
            DisplayCheck::Full => self.is_hidden_full(host, node),
            DisplayCheck::LegacyFull => self.is_hidden_legacy(host, node),
            DisplayCheck::NonZeroArea => self.is_hidden_full(host, node) || is_zero_area(host, node),
        }
    }

    fn is_hidden_full<H>(&mut self, host: &H, node: N) -> bool
    where
        H: FocusHost<Node = N> + ?Sized,
    {
        if host.computed_style(node).visibility == Visibility::Hidden {
            return true;
        }
        if self.under_undisclosed_root(host, node) {
            return is_zero_area(host, node);
        }
        // Layout already resolved inherited display; no box means hidden
        if host.is_connected(node) {
            return host.client_rects(node).is_empty();
        }
        true
    }

    fn is_hidden_legacy<H>(&mut self, host: &H, node: N) -> bool
    where
        H: FocusHost<Node = N> + ?Sized,
    {
        if host.computed_style(node).visibility == Visibility::Hidden {
            return true;
        }
        if self.under_undisclosed_root(host, node) {
            return is_zero_area(host, node);
        }
        self.in_display_none(host, node)
    }

    /// `display: none` on `node` or any composed ancestor (memoized)
    ///
    /// Walks up until a cached answer or a `display: none` element, then
    /// records the result for every node on the way.
    fn in_display_none<H>(&mut self, host: &H, node: N) -> bool
    where
        H: FocusHost<Node = N> + ?Sized,
    {
        let mut chain = Vec::new();
        let mut current = Some(node);
        let mut hidden = false;
        while let Some(n) = current {
            if let Some(&cached) = self.display_none.get(&n) {
                hidden = cached;
                break;
            }
            chain.push(n);
            if host.display(n) == Display::None {
                hidden = true;
                break;
            }
            current = composed_parent(host, n);
        }
        for n in chain {
            self.display_none.insert(n, hidden);
        }
        hidden
    }

    /// Whether some composed ancestor hosts a shadow root that only the
    /// custom accessor knows about and cannot disclose
    fn under_undisclosed_root<H>(&self, host: &H, node: N) -> bool
    where
        H: FocusHost<Node = N> + ?Sized,
    {
        if !self.shadow.is_custom() {
            return false;
        }
        let mut current = Some(node);
        while let Some(n) = current {
            let parent = host.parent_element(n);
            if let Some(p) = parent {
                if host.open_shadow_root(p).is_none()
                    && self.shadow.lookup(host, p) == ShadowLookup::Undisclosed
                {
                    return true;
                }
            }
            current = host
                .assigned_slot(n)
                .or(parent)
                .or_else(|| host.shadow_host(host.root_node(n)));
        }
        false
    }
}

fn is_zero_area<H: LayoutOracle + ?Sized>(host: &H, node: H::Node) -> bool {
    host.bounding_client_rect(node).is_zero_area()
}
