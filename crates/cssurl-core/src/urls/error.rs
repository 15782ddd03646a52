//! Error type for escape/restore.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// A placeholder names an index this processor never issued. The escaped
    /// text and the registry come from different escape passes.
    #[error("unknown url placeholder index {index} in namespace {namespace}")]
    UnknownIndex { namespace: String, index: usize },

    /// Namespace must be non-empty ASCII alphanumerics or `_`.
    #[error("invalid placeholder namespace {0:?}: expected [A-Za-z0-9_]+")]
    InvalidNamespace(String),
}
