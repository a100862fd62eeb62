//! Focus engine errors

use fos_dom::SelectorError;

/// Result alias for the public API
pub type FocusResult<T> = Result<T, FocusError>;

/// Focus engine error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FocusError {
    /// A required node was missing or is not an element
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The radio group name cannot be escaped for a selector
    #[error("CSS.escape is unavailable; cannot safely query radio group {name:?}")]
    SelectorEscapeUnavailable { name: String },

    /// The host rejected a selector
    #[error("Selector query failed: {0}")]
    Selector(#[from] SelectorError),
}
