//! Focusability predicates
//!
//! `is_focusable` runs the cheap structural checks first (disabled,
//! inert, hidden input, `<details>`, `<fieldset>`) and only then asks
//! the visibility oracle. `is_tabbable` adds the tab index and radio
//! group rules on top.

use crate::candidates::{first_child_named, is_first_summary};
use crate::error::FocusError;
use crate::host::{FocusHost, FocusTree, parent_or_host};
use crate::options::DisplayCheck;
use crate::shadow::ShadowTraversal;
use crate::tab_index::effective_tab_index;
use crate::visibility::VisibilityOracle;

/// `inert` attribute in its truthy form
fn has_inert_attribute<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> bool {
    host.attribute(node, "inert")
        .is_some_and(|value| value.is_empty() || value.eq_ignore_ascii_case("true"))
}

/// Whether `node` is inert; with `look_up`, inherited through ancestors
/// and shadow hosts
pub(crate) fn is_inert<H: FocusTree + ?Sized>(host: &H, node: H::Node, look_up: bool) -> bool {
    if has_inert_attribute(host, node) {
        return true;
    }
    if !look_up {
        return false;
    }
    let mut current = parent_or_host(host, node);
    while let Some(ancestor) = current {
        if has_inert_attribute(host, ancestor) {
            return true;
        }
        current = parent_or_host(host, ancestor);
    }
    false
}

fn is_input_type<H: FocusTree + ?Sized>(host: &H, node: H::Node, kind: &str) -> bool {
    host.tag_name(node) == "input"
        && host
            .attribute(node, "type")
            .is_some_and(|value| value.trim().eq_ignore_ascii_case(kind))
}

/// Hidden by a closed `<details>` ancestor
///
/// A closed `details` renders only its first `summary`, so a node is
/// hidden unless its path to every closed ancestor runs through that
/// ancestor's first summary.
fn is_hidden_by_details<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> bool {
    if host.tag_name(node) == "summary"
        && host
            .parent_element(node)
            .is_some_and(|parent| host.tag_name(parent) == "details")
        && !is_first_summary(host, node)
    {
        return true;
    }
    let mut child = node;
    while let Some(parent) = host.parent_element(child) {
        if host.tag_name(parent) == "details"
            && !host.has_attribute(parent, "open")
            && first_child_named(host, parent, "summary") != Some(child)
        {
            return true;
        }
        child = parent;
    }
    false
}

/// A `details` element with a `summary` delegates focus to the summary
fn is_details_with_summary<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> bool {
    host.tag_name(node) == "details" && first_child_named(host, node, "summary").is_some()
}

/// Disabled through a `<fieldset disabled>` ancestor
///
/// Descendants of a disabled fieldset's first `legend` child escape that
/// fieldset, but not any other disabled fieldset further up.
fn is_disabled_from_fieldset<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> bool {
    if !matches!(host.tag_name(node), "input" | "button" | "select" | "textarea") {
        return false;
    }
    let mut child = node;
    while let Some(parent) = host.parent_element(child) {
        if host.tag_name(parent) == "fieldset"
            && host.is_disabled(parent)
            && first_child_named(host, parent, "legend") != Some(child)
        {
            return true;
        }
        child = parent;
    }
    false
}

/// Focusability evaluator for one top-level call
pub(crate) struct Evaluator<'h, 'o, 'a, H: FocusHost + ?Sized> {
    host: &'h H,
    visibility: VisibilityOracle<'o, 'a, H::Node>,
    /// `SelectorEscapeUnavailable` is logged once per call
    escape_warned: bool,
}

impl<'h, 'o, 'a, H: FocusHost + ?Sized> Evaluator<'h, 'o, 'a, H> {
    pub(crate) fn new(host: &'h H, check: DisplayCheck, shadow: ShadowTraversal<'o, 'a, H::Node>) -> Self {
        Self {
            host,
            visibility: VisibilityOracle::new(check, shadow),
            escape_warned: false,
        }
    }

    /// Whether `node` can receive focus by any means
    pub(crate) fn is_focusable(&mut self, node: H::Node) -> bool {
        let host = self.host;
        let reason = if host.is_disabled(node) {
            "disabled"
        } else if is_inert(host, node, true) {
            "inert"
        } else if is_input_type(host, node, "hidden") {
            "hidden input"
        } else if is_hidden_by_details(host, node) {
            "inside closed details"
        } else if is_details_with_summary(host, node) {
            "details with summary"
        } else if is_disabled_from_fieldset(host, node) {
            "disabled fieldset"
        } else if self.visibility.is_hidden(host, node) {
            "hidden"
        } else {
            return true;
        };
        tracing::trace!(node = ?node, reason, "not focusable");
        false
    }

    /// Whether `node` takes part in sequential navigation
    pub(crate) fn is_tabbable(&mut self, node: H::Node) -> bool {
        let host = self.host;
        if effective_tab_index(host, node) < 0 {
            tracing::trace!(node = ?node, reason = "negative tab index", "not tabbable");
            return false;
        }
        if is_input_type(host, node, "radio") && !self.is_tabbable_radio(node) {
            tracing::trace!(node = ?node, reason = "unchecked radio in checked group", "not tabbable");
            return false;
        }
        self.is_focusable(node)
    }

    /// A named radio is tabbable when its group has no checked member or
    /// when it is the checked member
    fn is_tabbable_radio(&mut self, node: H::Node) -> bool {
        let host = self.host;
        let Some(name) = host.attribute(node, "name").filter(|name| !name.is_empty()) else {
            return true;
        };
        let form = host.form_owner(node);
        let scope = form.unwrap_or_else(|| host.root_node(node));
        let group = self.radio_group(scope, name);
        let checked = group
            .into_iter()
            .find(|&radio| host.is_checked(radio) && host.form_owner(radio) == form);
        checked.is_none_or(|checked| checked == node)
    }

    /// Radios named `name` below `scope`
    fn radio_group(&mut self, scope: H::Node, name: &str) -> Vec<H::Node> {
        let host = self.host;
        let escaped = host.css_escape(name).unwrap_or_else(|| {
            if !self.escape_warned {
                self.escape_warned = true;
                let err = FocusError::SelectorEscapeUnavailable { name: name.to_string() };
                tracing::warn!(%err, "querying radio groups with unescaped names");
            }
            name.to_string()
        });
        match host.query_selector_all(scope, &radio_selector(&escaped)) {
            Ok(radios) => radios,
            Err(err) => {
                let err = FocusError::from(err);
                tracing::error!(%err, name, "radio group selector failed; scanning the tree instead");
                self.scan_radio_group(scope, name)
            }
        }
    }

    /// Structural fallback when no selector can express the group
    fn scan_radio_group(&self, scope: H::Node, name: &str) -> Vec<H::Node> {
        let host = self.host;
        let mut out = Vec::new();
        let mut stack = host.children(scope);
        stack.reverse();
        while let Some(node) = stack.pop() {
            if is_input_type(host, node, "radio") && host.attribute(node, "name") == Some(name) {
                out.push(node);
            }
            let mut children = host.children(node);
            children.reverse();
            stack.extend(children);
        }
        out
    }
}

fn radio_selector(escaped_name: &str) -> String {
    format!(r#"input[type="radio"][name="{escaped_name}"]"#)
}
