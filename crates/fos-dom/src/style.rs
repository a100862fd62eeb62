//! Style and layout emulation
//!
//! Resolves `display`/`visibility` from UA defaults and inline `style`
//! attributes, and derives client rects from the composed (flat) tree.
//! There is no real box layout: a rendered element gets one rect whose
//! size comes from inline `width`/`height` or a fixed default.

use crate::{DOMRect, DomTree, NodeId};

/// Width of a rendered element without an inline `width`
pub const DEFAULT_WIDTH: f64 = 100.0;
/// Height of a rendered element without an inline `height`
pub const DEFAULT_HEIGHT: f64 = 20.0;

/// Computed `display`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    Inline,
    InlineBlock,
    Contents,
    None,
}

impl Display {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "block" | "flex" | "grid" | "list-item" | "table" => Some(Self::Block),
            "inline" => Some(Self::Inline),
            "inline-block" | "inline-flex" | "inline-grid" => Some(Self::InlineBlock),
            "contents" => Some(Self::Contents),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Computed `visibility`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

impl Visibility {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "visible" => Some(Self::Visible),
            "hidden" => Some(Self::Hidden),
            "collapse" => Some(Self::Collapse),
            _ => None,
        }
    }
}

/// The subset of computed style the engine consumers query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComputedStyle {
    pub display: Display,
    pub visibility: Visibility,
}

#[derive(Debug, Default)]
struct DeclaredStyle {
    display: Option<Display>,
    visibility: Option<Visibility>,
    width: Option<f64>,
    height: Option<f64>,
}

fn parse_length(value: &str) -> Option<f64> {
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

fn parse_inline_style(text: &str) -> DeclaredStyle {
    let mut style = DeclaredStyle::default();
    for declaration in text.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim().trim_end_matches("!important").trim().to_ascii_lowercase();
        match property.as_str() {
            "display" => style.display = Display::parse(&value).or(style.display),
            "visibility" => style.visibility = Visibility::parse(&value).or(style.visibility),
            "width" => style.width = parse_length(&value).or(style.width),
            "height" => style.height = parse_length(&value).or(style.height),
            _ => {}
        }
    }
    style
}

const DISPLAY_NONE: &[&str] = &[
    "base", "head", "link", "meta", "noscript", "script", "style", "template", "title",
];

const DISPLAY_INLINE: &[&str] = &[
    "a", "abbr", "b", "code", "em", "i", "label", "small", "span", "strong", "sub", "sup",
];

const DISPLAY_INLINE_BLOCK: &[&str] = &[
    "audio", "button", "iframe", "img", "input", "select", "textarea", "video",
];

impl DomTree {
    fn declared_style(&self, id: NodeId) -> DeclaredStyle {
        self.get_attribute(id, "style")
            .map(parse_inline_style)
            .unwrap_or_default()
    }

    fn default_display(&self, id: NodeId) -> Display {
        let tag = self.tag_name(id);
        if DISPLAY_NONE.contains(&tag)
            || self.has_attribute(id, "hidden")
            || (tag == "input"
                && self
                    .get_attribute(id, "type")
                    .is_some_and(|t| t.eq_ignore_ascii_case("hidden")))
        {
            Display::None
        } else if tag == "slot" {
            Display::Contents
        } else if DISPLAY_INLINE.contains(&tag) {
            Display::Inline
        } else if DISPLAY_INLINE_BLOCK.contains(&tag) {
            Display::InlineBlock
        } else {
            Display::Block
        }
    }

    /// Parent in the flat tree: assigned slot, parent element, or host
    pub fn composed_parent(&self, id: NodeId) -> Option<NodeId> {
        self.find_assigned_slot(id)
            .or_else(|| self.parent_element(id))
            .or_else(|| self.parent(id).and_then(|p| self.shadow_host(p)))
    }

    /// `getComputedStyle` for the properties the emulation models
    pub fn computed_style(&self, id: NodeId) -> ComputedStyle {
        if !self.is_element(id) {
            return ComputedStyle::default();
        }
        ComputedStyle {
            display: self.display(id),
            visibility: self.visibility(id),
        }
    }

    /// Computed `display` alone; does not resolve inherited properties
    pub fn display(&self, id: NodeId) -> Display {
        if !self.is_element(id) {
            return ComputedStyle::default().display;
        }
        self.declared_style(id)
            .display
            .unwrap_or_else(|| self.default_display(id))
    }

    /// Computed `visibility`: the nearest declared value up the flat tree
    fn visibility(&self, id: NodeId) -> Visibility {
        let mut current = Some(id);
        while let Some(node) = current {
            if let Some(visibility) = self.declared_style(node).visibility {
                return visibility;
            }
            current = self.composed_parent(node);
        }
        Visibility::Visible
    }

    /// Whether `id` and its flat-tree ancestors produce boxes
    fn is_rendered(&self, id: NodeId) -> bool {
        if !self.is_element(id) || !self.is_connected(id) {
            return false;
        }
        let mut current = Some(id);
        while let Some(node) = current {
            if self.display(node) == Display::None {
                return false;
            }
            // Light children of a shadow host render only through a slot
            if let Some(parent) = self.parent_element(node) {
                if self.shadow_root_internal(parent).is_some()
                    && self.find_assigned_slot(node).is_none()
                {
                    return false;
                }
                if self.tag_name(parent) == "details"
                    && !self.has_attribute(parent, "open")
                    && !self.is_details_summary(node)
                {
                    return false;
                }
            }
            current = self.composed_parent(node);
        }
        true
    }

    /// `getBoundingClientRect`
    pub fn bounding_client_rect(&self, id: NodeId) -> DOMRect {
        if !self.is_rendered(id) || self.display(id) == Display::Contents {
            return DOMRect::new();
        }
        let declared = self.declared_style(id);
        DOMRect::from_xywh(
            0.0,
            0.0,
            declared.width.unwrap_or(DEFAULT_WIDTH),
            declared.height.unwrap_or(DEFAULT_HEIGHT),
        )
    }

    /// `getClientRects`: empty for elements without a box
    pub fn client_rects(&self, id: NodeId) -> Vec<DOMRect> {
        if !self.is_rendered(id) || self.display(id) == Display::Contents {
            return Vec::new();
        }
        vec![self.bounding_client_rect(id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShadowRootMode;

    fn attached(tree: &mut DomTree, parent: NodeId, tag: &str, style: Option<&str>) -> NodeId {
        let id = tree.create_element(tag);
        if let Some(style) = style {
            tree.set_attribute(id, "style", style).unwrap();
        }
        tree.append_child(parent, id).unwrap();
        id
    }

    #[test]
    fn test_parse_inline_style() {
        let style = parse_inline_style("display: NONE; visibility:hidden; width: 0px; height: 3");
        assert_eq!(style.display, Some(Display::None));
        assert_eq!(style.visibility, Some(Visibility::Hidden));
        assert_eq!(style.width, Some(0.0));
        assert_eq!(style.height, Some(3.0));
    }

    #[test]
    fn test_visibility_inherits() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let outer = attached(&mut tree, root, "div", Some("visibility: hidden"));
        let inner = attached(&mut tree, outer, "button", None);
        let visible = attached(&mut tree, outer, "button", Some("visibility: visible"));

        assert_eq!(tree.computed_style(inner).visibility, Visibility::Hidden);
        assert_eq!(tree.computed_style(visible).visibility, Visibility::Visible);
    }

    #[test]
    fn test_display_none_ancestor_has_no_rects() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let outer = attached(&mut tree, root, "div", Some("display: none"));
        let inner = attached(&mut tree, outer, "button", None);

        assert_eq!(tree.computed_style(inner).display, Display::InlineBlock);
        assert!(tree.client_rects(inner).is_empty());
    }

    #[test]
    fn test_deep_chain_resolves_without_recursion() {
        let mut tree = DomTree::new();
        let mut parent = attached(&mut tree, NodeId::ROOT, "div", Some("visibility: hidden"));
        for _ in 0..20_000 {
            parent = attached(&mut tree, parent, "div", None);
        }
        let leaf = attached(&mut tree, parent, "button", None);

        assert_eq!(tree.computed_style(leaf).visibility, Visibility::Hidden);
        assert_eq!(tree.client_rects(leaf).len(), 1);
    }

    #[test]
    fn test_display_contents() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let outer = attached(&mut tree, root, "div", Some("display: contents"));
        let inner = attached(&mut tree, outer, "button", None);

        assert!(tree.client_rects(outer).is_empty());
        assert_eq!(tree.client_rects(inner).len(), 1);
    }

    #[test]
    fn test_detached_has_no_rects() {
        let mut tree = DomTree::new();
        let orphan = tree.create_element("button");
        assert!(tree.client_rects(orphan).is_empty());
        assert!(tree.bounding_client_rect(orphan).is_zero_area());
    }

    #[test]
    fn test_unslotted_child_not_rendered() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let host = attached(&mut tree, root, "div", None);
        let shadow = tree.attach_shadow(host, ShadowRootMode::Open).unwrap();
        let slot = attached(&mut tree, shadow, "slot", None);
        tree.set_attribute(slot, "name", "only").unwrap();
        let child = attached(&mut tree, host, "button", None);

        assert!(tree.client_rects(child).is_empty());
        tree.set_attribute(child, "slot", "only").unwrap();
        assert_eq!(tree.client_rects(child).len(), 1);
        assert_eq!(tree.composed_parent(child), Some(slot));
    }

    #[test]
    fn test_closed_details_content() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let details = attached(&mut tree, root, "details", None);
        let summary = attached(&mut tree, details, "summary", None);
        let body = attached(&mut tree, details, "input", None);

        assert_eq!(tree.client_rects(summary).len(), 1);
        assert!(tree.client_rects(body).is_empty());
        tree.set_attribute(details, "open", "").unwrap();
        assert_eq!(tree.client_rects(body).len(), 1);
    }

    #[test]
    fn test_inline_size() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let flat = attached(&mut tree, root, "button", Some("width: 0; height: 0"));

        assert_eq!(tree.client_rects(flat).len(), 1);
        assert!(tree.bounding_client_rect(flat).is_zero_area());
    }
}
