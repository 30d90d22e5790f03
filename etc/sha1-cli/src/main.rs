//! sha1 - print the SHA-1 digest of a message
//!
//! The message is the TEXT argument, the contents of `--file`, or stdin.

mod args;
mod input;

use std::io;

use clap::Parser;
use crypto_digest::Digest;
use sha1::Sha1;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let data = input::read_message(&args.source(), io::stdin().lock())?;
    tracing::debug!(
        blocks = (data.len() + 9).div_ceil(Sha1::block_size()),
        "hashing message"
    );

    let hex = sha1::try_calculate(&data)?;
    println!("{}", input::render(&hex, args.quiet));
    Ok(())
}
