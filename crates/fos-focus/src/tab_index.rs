//! Effective tab index
//!
//! The `tabindex` attribute wins when it parses; otherwise a few
//! element kinds get an explicit default of 0 because engines disagree
//! on their native `tabIndex` (editing hosts, media with controls,
//! `<details>`). Everything else falls back to the host's property.

use crate::host::FocusTree;

/// `parseInt(value, 10)`: leading whitespace, optional sign, leading
/// digits; anything after the digits is ignored
pub(crate) fn parse_tab_index(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
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
    Some(value.clamp(i32::MIN.into(), i32::MAX.into()) as i32)
}

/// The `tabindex` attribute, when present and numeric
pub(crate) fn explicit_tab_index<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> Option<i32> {
    host.attribute(node, "tabindex").and_then(parse_tab_index)
}

/// `contenteditable` in a state that makes the element an editing host
pub(crate) fn is_content_editable<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> bool {
    host.attribute(node, "contenteditable").is_some_and(|value| {
        value.is_empty()
            || value.eq_ignore_ascii_case("true")
            || value.eq_ignore_ascii_case("plaintext-only")
    })
}

/// Resolved tab index used for filtering and ordering
pub(crate) fn effective_tab_index<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> i32 {
    if let Some(index) = explicit_tab_index(host, node) {
        return index;
    }
    if is_content_editable(host, node) {
        return 0;
    }
    let has_attribute = host.has_attribute(node, "tabindex");
    match host.tag_name(node) {
        "audio" | "video" if !has_attribute && host.has_attribute(node, "controls") => 0,
        "details" if !has_attribute => 0,
        _ => host.native_tab_index(node),
    }
}

/// Index a focus navigation scope (shadow host or slot) sorts by
///
/// Scopes never sort before positive entries because of a negative
/// index; they fall back to document order instead.
pub(crate) fn scope_sort_index<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> i32 {
    effective_tab_index(host, node).max(0)
}
