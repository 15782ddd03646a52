//! Reads the stylesheet named on the command line.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};

/// Reads `input` as a file path, or stdin when it is `-`.
pub(super) fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(input).with_context(|| format!("read {}", input))
}
