//! Escape/restore facade tying the matcher, normalizer and registry together.

use tracing::{debug, trace};

use super::error::UrlError;
use super::matcher::scan_urls;
use super::normalize::normalize;
use super::placeholder::{find_placeholder, validate_namespace, DEFAULT_NAMESPACE};
use super::position::Waypoint;
use super::registry::PlaceholderRegistry;
use crate::config::ProcessorConfig;

/// Replaces `url(...)` occurrences with placeholder tokens and puts them back
/// after the surrounding text has been transformed.
///
/// The registry lives on the instance: restore must run on the same processor
/// that escaped the text.
#[derive(Debug, Clone)]
pub struct UrlsProcessor {
    registry: PlaceholderRegistry,
    save_waypoints: bool,
    remove_trailing_space: bool,
}

impl UrlsProcessor {
    /// Builds a processor from `config`, validating its namespace.
    pub fn new(config: &ProcessorConfig) -> Result<Self, UrlError> {
        let namespace = config
            .namespace
            .clone()
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        validate_namespace(&namespace)?;

        Ok(Self {
            registry: PlaceholderRegistry::new(namespace),
            save_waypoints: config.save_waypoints,
            remove_trailing_space: config.remove_trailing_space,
        })
    }

    /// Processor with the default namespace and both options off.
    pub fn with_defaults() -> Self {
        Self {
            registry: PlaceholderRegistry::new(DEFAULT_NAMESPACE.to_string()),
            save_waypoints: false,
            remove_trailing_space: false,
        }
    }

    pub fn registry(&self) -> &PlaceholderRegistry {
        &self.registry
    }

    /// Replaces every well-formed `url(...)` in `text` with a token.
    ///
    /// Calling this again on the same processor continues the numbering.
    pub fn escape(&mut self, text: &str) -> String {
        let spans = scan_urls(text);
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;

        for found in &spans {
            out.push_str(&text[cursor..found.span.start]);

            let raw = found.raw_content(text);
            let normalized = normalize(raw, found.quote);
            let position = self
                .save_waypoints
                .then(|| Waypoint::of(found.text(text)));
            let token = self.registry.register(
                found.quote,
                raw.to_string(),
                normalized.restored,
                position,
            );
            trace!(
                token = %token,
                quote = ?found.quote,
                requires_quote = normalized.requires_quote,
                "escaped url"
            );

            out.push_str(&token);
            cursor = found.span.end;
        }
        out.push_str(&text[cursor..]);

        debug!(
            namespace = self.registry.namespace(),
            escaped = spans.len(),
            total = self.registry.len(),
            "url escape pass done"
        );
        out
    }

    /// Substitutes every token of this processor's namespace in `text` with
    /// its normalized `url(...)` form.
    ///
    /// Fails on the first token whose index this processor never issued.
    pub fn restore(&self, text: &str) -> Result<String, UrlError> {
        let namespace = self.registry.namespace();
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        let mut restored = 0usize;

        while let Some(found) = find_placeholder(text, cursor, namespace) {
            let entry = self.registry.resolve(found.index)?;
            out.push_str(&text[cursor..found.range.start]);
            out.push_str(&entry.restored);
            cursor = found.range.end;

            if self.remove_trailing_space {
                if let Some(c) = text[cursor..].chars().next().filter(|c| c.is_whitespace()) {
                    cursor += c.len_utf8();
                }
            }
            restored += 1;
        }
        out.push_str(&text[cursor..]);

        debug!(namespace, restored, "url restore pass done");
        Ok(out)
    }
}

impl Default for UrlsProcessor {
    fn default() -> Self {
        Self::with_defaults()
    }
}
