use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

/// Writes `shaders.gen.h` and `shaders.gen.c` into the current directory
///
/// The shader catalog and output names are built in; there are no options.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    // Quiet on success; `RUST_LOG=info` reports what was written
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .init();
    let Args {} = Args::parse();

    let now = Instant::now();
    let catalog = shadergen::builtin::catalog()
        .context("built-in shader catalog is invalid")?;
    let files = shadergen::generate(&catalog);
    info!(
        "Generated bindings for {} shaders in {:?}",
        catalog.len(),
        now.elapsed()
    );

    let dir = Path::new(".");
    files
        .write_to(dir)
        .with_context(|| format!("failed to write into {}", dir.display()))?;
    Ok(())
}
