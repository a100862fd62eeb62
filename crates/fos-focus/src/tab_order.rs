//! Sequential navigation order
//!
//! Positive tab indices come first in ascending order, ties broken by
//! document order; everything at 0 follows in document order. Scopes
//! (shadow hosts, slots) are sorted on their own and then placed as a
//! block using the owner's index.

use crate::candidates::Entry;
use crate::host::FocusTree;
use crate::tab_index::{effective_tab_index, scope_sort_index};

/// An element, or a sorted scope, awaiting placement
#[derive(Debug)]
struct Candidate<N> {
    document_order: usize,
    tab_index: i32,
    nodes: Vec<N>,
}

/// Order `entries` the way the Tab key visits them
pub(crate) fn sort_by_order<H: FocusTree + ?Sized>(host: &H, entries: Vec<Entry<H::Node>>) -> Vec<H::Node> {
    let mut regular = Vec::new();
    let mut positive = Vec::new();
    for (document_order, entry) in entries.into_iter().enumerate() {
        let (tab_index, nodes) = match entry {
            Entry::Element(node) => (effective_tab_index(host, node), vec![node]),
            Entry::Scope { owner, entries } => (scope_sort_index(host, owner), sort_by_order(host, entries)),
        };
        if tab_index > 0 {
            positive.push(Candidate { document_order, tab_index, nodes });
        } else {
            regular.extend(nodes);
        }
    }
    positive.sort_by_key(|candidate| (candidate.tab_index, candidate.document_order));
    positive
        .into_iter()
        .flat_map(|candidate| candidate.nodes)
        .chain(regular)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_dom::{Document, NodeId};

    fn with_tab_index(doc: &mut Document, value: Option<&str>) -> NodeId {
        let id = doc.tree.create_element("div");
        if let Some(value) = value {
            doc.tree.set_attribute(id, "tabindex", value).unwrap();
        }
        let body = doc.body();
        doc.tree.append_child(body, id).unwrap();
        id
    }

    #[test]
    fn test_positive_before_zero() {
        let mut doc = Document::default();
        let a = with_tab_index(&mut doc, Some("0"));
        let b = with_tab_index(&mut doc, Some("2"));
        let c = with_tab_index(&mut doc, Some("0"));
        let d = with_tab_index(&mut doc, Some("1"));
        let entries = [a, b, c, d].map(Entry::Element).to_vec();
        assert_eq!(sort_by_order(&doc, entries), vec![d, b, a, c]);
    }

    #[test]
    fn test_equal_indices_keep_document_order() {
        let mut doc = Document::default();
        let first = with_tab_index(&mut doc, Some("3"));
        let second = with_tab_index(&mut doc, Some("3"));
        let low = with_tab_index(&mut doc, Some("1"));
        let entries = [first, second, low].map(Entry::Element).to_vec();
        assert_eq!(sort_by_order(&doc, entries), vec![low, first, second]);
    }

    #[test]
    fn test_scope_sorted_as_block() {
        let mut doc = Document::default();
        let plain = with_tab_index(&mut doc, Some("0"));
        let host = with_tab_index(&mut doc, Some("1"));
        let inner_zero = with_tab_index(&mut doc, Some("0"));
        let inner_two = with_tab_index(&mut doc, Some("2"));
        let scopeless = with_tab_index(&mut doc, None);
        let entries = vec![
            Entry::Element(plain),
            Entry::Scope {
                owner: host,
                entries: vec![Entry::Element(inner_zero), Entry::Element(inner_two)],
            },
            Entry::Scope { owner: scopeless, entries: vec![] },
        ];
        assert_eq!(sort_by_order(&doc, entries), vec![inner_two, inner_zero, plain]);
    }
}
