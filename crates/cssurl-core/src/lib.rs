//! Escape and restore `url(...)` references around stylesheet minification.

pub mod config;
pub mod logging;
pub mod urls;

pub use config::ProcessorConfig;
pub use urls::{UrlError, UrlMatch, UrlsProcessor};
