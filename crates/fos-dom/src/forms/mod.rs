//! Form state
//!
//! The `disabled` property, checkedness, form ownership and the native
//! `tabIndex` property.

use crate::{DomError, DomResult, DomTree, NodeId};

/// Elements that reflect a `disabled` IDL attribute
const DISABLEABLE: &[&str] = &[
    "button", "fieldset", "input", "optgroup", "option", "select", "textarea",
];

/// Form-associated elements that have a form owner
const FORM_ASSOCIATED: &[&str] = &[
    "button", "fieldset", "input", "object", "output", "select", "textarea",
];

/// Elements focusable by default (`tabIndex` 0 without an attribute)
const DEFAULT_FOCUSABLE: &[&str] = &["button", "iframe", "input", "select", "textarea"];

/// HTML "rules for parsing integers"
pub(crate) fn parse_html_integer(value: &str) -> Option<i32> {
    let trimmed = value.trim_start_matches([' ', '\t', '\n', '\x0c', '\r']);
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };
    Some(value.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

impl DomTree {
    fn is_input_of_type(&self, id: NodeId, kind: &str) -> bool {
        self.tag_name(id) == "input"
            && self
                .get_attribute(id, "type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case(kind))
    }

    /// The `disabled` IDL property: reflects the attribute only
    pub fn is_disabled(&self, id: NodeId) -> bool {
        DISABLEABLE.contains(&self.tag_name(id)) && self.has_attribute(id, "disabled")
    }

    /// Checkedness of a checkbox or radio button
    pub fn is_checked(&self, id: NodeId) -> bool {
        if !(self.is_input_of_type(id, "radio") || self.is_input_of_type(id, "checkbox")) {
            return false;
        }
        let Some(elem) = self.element(id) else {
            return false;
        };
        elem.checkedness.unwrap_or_else(|| elem.has_attr("checked"))
    }

    /// Set checkedness; checking a radio unchecks the rest of its group
    pub fn set_checked(&mut self, id: NodeId, checked: bool) -> DomResult<()> {
        if checked && self.is_input_of_type(id, "radio") {
            for other in self.radio_group(id) {
                if other != id {
                    if let Some(elem) = self.element_mut(other) {
                        elem.checkedness = Some(false);
                    }
                }
            }
        }
        let elem = self.element_mut(id).ok_or(DomError::NotFound)?;
        elem.checkedness = Some(checked);
        Ok(())
    }

    /// Radio buttons sharing `id`'s group (same tree, form owner and name)
    pub fn radio_group(&self, id: NodeId) -> Vec<NodeId> {
        let Some(name) = self.get_attribute(id, "name").filter(|n| !n.is_empty()) else {
            return vec![id];
        };
        let owner = self.form_owner(id);
        self.descendants(self.root_node(id))
            .into_iter()
            .filter(|&other| {
                self.is_input_of_type(other, "radio")
                    && self.get_attribute(other, "name") == Some(name)
                    && self.form_owner(other) == owner
            })
            .collect()
    }

    /// The form owner of a form-associated element
    pub fn form_owner(&self, id: NodeId) -> Option<NodeId> {
        if !FORM_ASSOCIATED.contains(&self.tag_name(id)) {
            return None;
        }
        if let Some(form_id) = self.get_attribute(id, "form") {
            return self
                .descendants(self.root_node(id))
                .into_iter()
                .find(|&el| {
                    self.tag_name(el) == "form" && self.get_attribute(el, "id") == Some(form_id)
                });
        }
        let mut current = self.parent_element(id);
        while let Some(ancestor) = current {
            if self.tag_name(ancestor) == "form" {
                return Some(ancestor);
            }
            current = self.parent_element(ancestor);
        }
        None
    }

    /// The native `tabIndex` property
    ///
    /// Media elements and editing hosts report -1 without an attribute,
    /// matching engines that do not place them in sequential order.
    pub fn tab_index(&self, id: NodeId) -> i32 {
        if let Some(value) = self.get_attribute(id, "tabindex").and_then(parse_html_integer) {
            return value;
        }
        let tag = self.tag_name(id);
        let focusable = DEFAULT_FOCUSABLE.contains(&tag)
            || (matches!(tag, "a" | "area") && self.has_attribute(id, "href"))
            || (tag == "summary" && self.is_details_summary(id));
        if focusable { 0 } else { -1 }
    }

    /// Whether `id` is the first `summary` child of a `details` parent
    pub fn is_details_summary(&self, id: NodeId) -> bool {
        let Some(parent) = self.parent_element(id) else {
            return false;
        };
        self.tag_name(parent) == "details"
            && self
                .element_children(parent)
                .find(|&child| self.tag_name(child) == "summary")
                == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_html_integer() {
        assert_eq!(parse_html_integer("  7"), Some(7));
        assert_eq!(parse_html_integer("-1"), Some(-1));
        assert_eq!(parse_html_integer("3px"), Some(3));
        assert_eq!(parse_html_integer("abc"), None);
        assert_eq!(parse_html_integer(""), None);
    }

    #[test]
    fn test_radio_checkedness() {
        let mut tree = DomTree::new();
        let form = tree.create_element("form");
        tree.append_child(tree.root(), form).unwrap();
        let mut radios = Vec::new();
        for _ in 0..3 {
            let radio = tree.create_element("input");
            tree.set_attribute(radio, "type", "radio").unwrap();
            tree.set_attribute(radio, "name", "group").unwrap();
            tree.append_child(form, radio).unwrap();
            radios.push(radio);
        }
        tree.set_attribute(radios[0], "checked", "").unwrap();
        assert!(tree.is_checked(radios[0]));

        tree.set_checked(radios[2], true).unwrap();
        assert!(!tree.is_checked(radios[0]));
        assert!(tree.is_checked(radios[2]));
        assert_eq!(tree.form_owner(radios[1]), Some(form));
    }

    #[test]
    fn test_native_tab_index() {
        let mut tree = DomTree::new();
        let link = tree.create_element("a");
        let anchor = tree.create_element("a");
        tree.set_attribute(link, "href", "#").unwrap();
        let button = tree.create_element("button");
        let video = tree.create_element("video");
        tree.set_attribute(video, "controls", "").unwrap();
        let div = tree.create_element("div");
        tree.set_attribute(div, "tabindex", "4").unwrap();

        assert_eq!(tree.tab_index(link), 0);
        assert_eq!(tree.tab_index(anchor), -1);
        assert_eq!(tree.tab_index(button), 0);
        assert_eq!(tree.tab_index(video), -1);
        assert_eq!(tree.tab_index(div), 4);
    }

    #[test]
    fn test_disabled_reflects_attribute() {
        let mut tree = DomTree::new();
        let button = tree.create_element("button");
        let div = tree.create_element("div");
        tree.set_attribute(button, "disabled", "").unwrap();
        tree.set_attribute(div, "disabled", "").unwrap();

        assert!(tree.is_disabled(button));
        assert!(!tree.is_disabled(div));
    }
}
