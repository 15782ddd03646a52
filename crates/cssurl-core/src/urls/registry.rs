//! Append-only store of escaped urls, indexed by placeholder number.

use serde::Serialize;

use super::error::UrlError;
use super::matcher::QuoteKind;
use super::placeholder::format_placeholder;
use super::position::Waypoint;

/// One escaped `url(...)` occurrence. Never changes after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlMatch {
    /// 0-based, in order of appearance.
    pub index: usize,
    pub quote: QuoteKind,
    /// Content exactly as found between the delimiters.
    pub raw_content: String,
    /// Normalized `url(...)` text emitted on restore.
    pub restored: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Waypoint>,
}

/// Registry of escaped urls for one namespace. Indices are dense from 0.
#[derive(Debug, Clone)]
pub struct PlaceholderRegistry {
    namespace: String,
    entries: Vec<UrlMatch>,
}

impl PlaceholderRegistry {
    /// Callers validate `namespace` beforehand.
    pub(crate) fn new(namespace: String) -> Self {
        Self {
            namespace,
            entries: Vec::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Stores a new entry under the next index and returns its token text.
    pub fn register(
        &mut self,
        quote: QuoteKind,
        raw_content: String,
        restored: String,
        position: Option<Waypoint>,
    ) -> String {
        let index = self.entries.len();
        self.entries.push(UrlMatch {
            index,
            quote,
            raw_content,
            restored,
            position,
        });
        format_placeholder(&self.namespace, index, position)
    }

    pub fn resolve(&self, index: usize) -> Result<&UrlMatch, UrlError> {
        self.entries.get(index).ok_or_else(|| UrlError::UnknownIndex {
            namespace: self.namespace.clone(),
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UrlMatch> {
        self.entries.iter()
    }
}
