//! Shields `url(...)` references from minification passes.
//!
//! [`UrlsProcessor::escape`] swaps each occurrence for a placeholder token such
//! as `__ESCAPED_URL_CLEAN_CSS0__` (or `__ESCAPED_URL_CLEAN_CSS0(0,18)__` with
//! waypoints), and [`UrlsProcessor::restore`] puts back a normalized form:
//! line breaks removed, outer blanks trimmed, quotes dropped unless needed.

mod error;
mod matcher;
mod normalize;
mod placeholder;
mod position;
mod processor;
mod registry;

pub use error::UrlError;
pub use matcher::{scan_urls, QuoteKind, UrlSpan};
pub use normalize::{normalize, Normalized};
pub use placeholder::{
    find_placeholder, format_placeholder, validate_namespace, FoundPlaceholder, DEFAULT_NAMESPACE,
};
pub use position::Waypoint;
pub use processor::UrlsProcessor;
pub use registry::{PlaceholderRegistry, UrlMatch};
