//! Roundtrip command: escape then restore, yielding normalized urls.

use anyhow::Result;
use cssurl_core::{ProcessorConfig, UrlsProcessor};

use super::input::read_input;

pub fn run_roundtrip(cfg: &ProcessorConfig, input: &str) -> Result<()> {
    let css = read_input(input)?;
    let mut processor = UrlsProcessor::new(cfg)?;
    let escaped = processor.escape(&css);
    let restored = processor.restore(&escaped)?;
    tracing::info!(
        urls = processor.registry().len(),
        "roundtrip of {} complete",
        input
    );
    print!("{}", restored);
    Ok(())
}
