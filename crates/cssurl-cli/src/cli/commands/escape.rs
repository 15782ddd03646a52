//! Escape command: print the stylesheet with url placeholders.

use anyhow::Result;
use cssurl_core::{ProcessorConfig, UrlsProcessor};

use super::input::read_input;

pub fn run_escape(cfg: &ProcessorConfig, input: &str) -> Result<()> {
    let css = read_input(input)?;
    let mut processor = UrlsProcessor::new(cfg)?;
    print!("{}", processor.escape(&css));
    Ok(())
}
