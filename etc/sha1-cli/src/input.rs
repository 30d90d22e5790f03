use std::fs;
use std::io::Read;

use anyhow::{Context, Result};

use crate::args::Source;

/// Read the whole message into memory.
pub fn read_message<R: Read>(source: &Source, mut stdin: R) -> Result<Vec<u8>> {
    let data = match source {
        Source::Text(text) => text.as_bytes().to_vec(),
        Source::File(path) => fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        Source::Stdin => {
            let mut data = Vec::new();
            stdin.read_to_end(&mut data).context("failed to read stdin")?;
            data
        }
    };
    tracing::debug!(source = ?source, len = data.len(), "read message");
    Ok(data)
}

/// Format the output line for a digest.
pub fn render(hex: &str, quiet: bool) -> String {
    if quiet {
        hex.to_string()
    } else {
        format!("SHA-1 Hash: {}", hex)
    }
}
