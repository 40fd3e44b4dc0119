//! Interactive URL prompt used when no URL argument is given.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter the website URL: ";

/// Prints the prompt to `output` and reads one line from `input`.
pub fn read_url(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no URL provided (end of input)");
    }
    let url = line.trim();
    if url.is_empty() {
        bail!("no URL provided");
    }
    Ok(url.to_string())
}
