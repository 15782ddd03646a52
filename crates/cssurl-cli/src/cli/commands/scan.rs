//! Scan command: list url occurrences and how each would be restored.

use anyhow::Result;
use cssurl_core::urls::{QuoteKind, UrlMatch};
use cssurl_core::{ProcessorConfig, UrlsProcessor};

use super::input::read_input;

pub fn run_scan(cfg: &ProcessorConfig, input: &str, json: bool) -> Result<()> {
    let css = read_input(input)?;
    let mut processor = UrlsProcessor::new(cfg)?;
    processor.escape(&css);

    let matches: Vec<&UrlMatch> = processor.registry().iter().collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No urls.");
        return Ok(());
    }
    println!("{:>4}  {:<6}  {:<10}  RESTORED", "IDX", "QUOTE", "WAYPOINT");
    for m in matches {
        let waypoint = m
            .position
            .map(|wp| wp.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>4}  {:<6}  {:<10}  {}",
            m.index,
            quote_label(m.quote),
            waypoint,
            m.restored
        );
    }
    Ok(())
}

fn quote_label(quote: QuoteKind) -> &'static str {
    match quote {
        QuoteKind::None => "none",
        QuoteKind::Single => "single",
        QuoteKind::Double => "double",
    }
}
