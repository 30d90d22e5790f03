//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

/// Print the SHA-1 digest of a string, a file, or stdin
#[derive(Parser, Debug)]
#[command(name = "sha1")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text to hash (its UTF-8 bytes)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Hash the contents of this file instead
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print only the hex digest
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where the message bytes come from
#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl Args {
    pub fn source(&self) -> Source {
        match (&self.text, &self.file) {
            (Some(text), _) => Source::Text(text.clone()),
            (None, Some(path)) => Source::File(path.clone()),
            (None, None) => Source::Stdin,
        }
    }
}
