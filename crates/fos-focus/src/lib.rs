//! fOS Focus
//!
//! Focus-order resolution for the fOS engine: which elements can take
//! focus, which of them the Tab key visits, and in what order.
//!
//! Features:
//! - Candidate discovery over the flattened tree (shadow roots, slots)
//! - Focusability rules for disabled controls, `inert`, `<details>`,
//!   `<fieldset>` and radio groups
//! - Configurable visibility strategies (`full`, `legacy-full`,
//!   `non-zero-area`, `none`)
//! - Browser tab order with per-scope sorting
//!
//! The engine reads its host through the [`FocusTree`], [`LayoutOracle`]
//! and [`SelectorQuery`] ports; `fos_dom::Document` implements all three.

mod candidates;
mod dom_host;
mod error;
mod focusable;
mod host;
mod options;
mod shadow;
mod tab_index;
mod tab_order;
mod visibility;

pub use error::{FocusError, FocusResult};
pub use host::{FocusHost, FocusTree, LayoutOracle, SelectorQuery};
pub use options::{DisplayCheck, FocusConfig, FocusOptions, ShadowLookup, ShadowRootFn, ShadowRootPolicy};

use candidates::{CollectMode, Collector, Entry, is_candidate, is_focusable_candidate};
use focusable::Evaluator;
use shadow::ShadowTraversal;

/// Tabbable elements below `roots`, in sequential navigation order
pub fn tabbable<H>(host: &H, roots: &[H::Node], options: FocusOptions<'_, H::Node>) -> FocusResult<Vec<H::Node>>
where
    H: FocusHost + ?Sized,
{
    ensure_roots(host, roots)?;
    let shadow = ShadowTraversal::new(&options.shadow_roots);
    let entries = Collector::new(host, shadow, CollectMode::Tabbable).collect(roots, options.include_container);
    let mut evaluator = Evaluator::new(host, options.display_check, shadow);
    let entries = Entry::retain(entries, &mut |node| evaluator.is_tabbable(node));
    let ordered = tab_order::sort_by_order(host, entries);
    tracing::debug!(
        roots = roots.len(),
        tabbable = ordered.len(),
        display_check = %options.display_check,
        "resolved tab order"
    );
    Ok(ordered)
}

/// Focusable elements below `roots`, in traversal order
pub fn focusable<H>(host: &H, roots: &[H::Node], options: FocusOptions<'_, H::Node>) -> FocusResult<Vec<H::Node>>
where
    H: FocusHost + ?Sized,
{
    ensure_roots(host, roots)?;
    let shadow = ShadowTraversal::new(&options.shadow_roots);
    let candidates = Entry::flatten(
        Collector::new(host, shadow, CollectMode::Focusable).collect(roots, options.include_container),
    );
    let total = candidates.len();
    let mut evaluator = Evaluator::new(host, options.display_check, shadow);
    let found: Vec<_> = candidates
        .into_iter()
        .filter(|&node| evaluator.is_focusable(node))
        .collect();
    tracing::debug!(
        roots = roots.len(),
        candidates = total,
        focusable = found.len(),
        display_check = %options.display_check,
        "resolved focusable set"
    );
    Ok(found)
}

/// Whether `node` is in the matching set and tabbable
pub fn is_tabbable<H>(host: &H, node: H::Node, options: FocusOptions<'_, H::Node>) -> FocusResult<bool>
where
    H: FocusHost + ?Sized,
{
    ensure_element(host, node)?;
    if !is_candidate(host, node) {
        return Ok(false);
    }
    let shadow = ShadowTraversal::new(&options.shadow_roots);
    Ok(Evaluator::new(host, options.display_check, shadow).is_tabbable(node))
}

/// Whether `node` is in the matching set (or an `iframe`) and focusable
pub fn is_focusable<H>(host: &H, node: H::Node, options: FocusOptions<'_, H::Node>) -> FocusResult<bool>
where
    H: FocusHost + ?Sized,
{
    ensure_element(host, node)?;
    if !is_focusable_candidate(host, node) {
        return Ok(false);
    }
    let shadow = ShadowTraversal::new(&options.shadow_roots);
    Ok(Evaluator::new(host, options.display_check, shadow).is_focusable(node))
}

/// Effective tab index of `node`
pub fn get_tab_index<H>(host: &H, node: H::Node) -> FocusResult<i32>
where
    H: FocusTree + ?Sized,
{
    ensure_element(host, node)?;
    Ok(tab_index::effective_tab_index(host, node))
}

fn ensure_element<H: FocusTree + ?Sized>(host: &H, node: H::Node) -> FocusResult<()> {
    if host.is_element(node) {
        Ok(())
    } else {
        Err(FocusError::InvalidArgument(format!("expected an element, got {node:?}")))
    }
}

fn ensure_roots<H: FocusTree + ?Sized>(host: &H, roots: &[H::Node]) -> FocusResult<()> {
    if roots.is_empty() {
        return Err(FocusError::InvalidArgument("no root element given".into()));
    }
    roots.iter().try_for_each(|&root| ensure_element(host, root))
}
