//! Host ports
//!
//! Capabilities the engine needs from its host environment. The DOM
//! itself, computed style and selector matching all live on the host
//! side; the engine only reads through these traits.

use std::fmt::Debug;
use std::hash::Hash;

use fos_dom::{ComputedStyle, DOMRect, Display, SelectorError};

/// Tree structure and element state
pub trait FocusTree {
    /// Node handle; cheap to copy and compare
    type Node: Copy + Eq + Hash + Debug;

    /// Whether `node` refers to an element
    fn is_element(&self, node: Self::Node) -> bool;

    /// Lower-case local name (empty for non-elements)
    fn tag_name(&self, node: Self::Node) -> &str;

    /// Attribute value
    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    fn has_attribute(&self, node: Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// `parentElement`: `None` at a document or shadow root boundary
    fn parent_element(&self, node: Self::Node) -> Option<Self::Node>;

    /// Element children in tree order (`node` may be a shadow root)
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// `getRootNode()`: document, shadow root, or detached subtree root
    fn root_node(&self, node: Self::Node) -> Self::Node;

    /// Host element when `node` is a shadow root
    fn shadow_host(&self, node: Self::Node) -> Option<Self::Node>;

    /// The native `shadowRoot` accessor (open roots only)
    fn open_shadow_root(&self, node: Self::Node) -> Option<Self::Node>;

    /// `assignedSlot`
    fn assigned_slot(&self, node: Self::Node) -> Option<Self::Node>;

    /// `assignedElements()` of a `<slot>`
    fn assigned_elements(&self, slot: Self::Node) -> Vec<Self::Node>;

    /// `isConnected`
    fn is_connected(&self, node: Self::Node) -> bool;

    /// The `disabled` property of the element itself
    fn is_disabled(&self, node: Self::Node) -> bool;

    /// The `checked` property
    fn is_checked(&self, node: Self::Node) -> bool;

    /// The `form` property
    fn form_owner(&self, node: Self::Node) -> Option<Self::Node>;

    /// The native `tabIndex` property
    fn native_tab_index(&self, node: Self::Node) -> i32;
}

/// Computed style and geometry
pub trait LayoutOracle: FocusTree {
    fn computed_style(&self, node: Self::Node) -> ComputedStyle;

    /// Computed `display` only; hosts can skip resolving inherited
    /// properties
    fn display(&self, node: Self::Node) -> Display {
        self.computed_style(node).display
    }

    fn client_rects(&self, node: Self::Node) -> Vec<DOMRect>;

    fn bounding_client_rect(&self, node: Self::Node) -> DOMRect;
}

/// Selector escaping and matching
pub trait SelectorQuery: FocusTree {
    /// `CSS.escape`; `None` when the environment lacks it
    fn css_escape(&self, value: &str) -> Option<String>;

    /// `scope.querySelectorAll(selector)`
    fn query_selector_all(&self, scope: Self::Node, selector: &str) -> Result<Vec<Self::Node>, SelectorError>;
}

/// Everything the engine needs
pub trait FocusHost: LayoutOracle + SelectorQuery {}

impl<T: LayoutOracle + SelectorQuery> FocusHost for T {}

/// Next node up the composed tree, crossing shadow boundaries
///
/// Prefers the assigned slot, then the parent element, then the host of
/// the containing shadow root.
pub(crate) fn composed_parent<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> Option<H::Node> {
    host.assigned_slot(node)
        .or_else(|| host.parent_element(node))
        .or_else(|| host.shadow_host(host.root_node(node)))
}

/// `parentElement`, continuing to the host at a shadow root
pub(crate) fn parent_or_host<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> Option<H::Node> {
    host.parent_element(node)
        .or_else(|| host.shadow_host(host.root_node(node)))
}
