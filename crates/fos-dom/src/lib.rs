//! fOS DOM - Document Object Model
//!
//! Arena-backed DOM tree used as the host environment for the fOS
//! engine crates:
//! - Elements, text and comments linked by sibling pointers
//! - Shadow roots (open/closed) with named slot assignment
//! - Form state (`disabled`, checkedness, form owner, `tabIndex`)
//! - An emulated style/layout layer (display, visibility, client rects)
//! - A small selector engine for compound attribute selectors

mod node;
mod tree;
mod document;
mod shadow;
mod forms;
mod geometry;
mod style;
mod selector;

pub use node::{Node, NodeData, ElementData, TextData, Attribute};
pub use tree::{DomTree, Children};
pub use document::Document;
pub use shadow::{ShadowRootData, ShadowRootMode};
pub use geometry::DOMRect;
pub use style::{ComputedStyle, Display, Visibility};
pub use selector::{Selector, SelectorError, css_escape};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Whether this ID refers to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found")]
    NotFound,

    #[error("Hierarchy request error")]
    HierarchyRequest,

    #[error("Node is not a child")]
    NotAChild,

    #[error("Element already has a shadow root")]
    ShadowAlreadyAttached,

    #[error("<{0}> cannot host a shadow root")]
    ShadowNotSupported(String),
}
