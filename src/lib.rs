pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod processor;
pub mod writer;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::error::EmbedError;
use crate::model::{Layout, Mode};

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_tracing(args.verbose);

    let layout = config::load(args.config.as_deref()).with_context(|| "Loading layout config")?;
    let mode = if args.check { Mode::Check } else { Mode::Write };

    embed_all(&args.root, &layout, mode)?;
    Ok(())
}

/// Embed every builtin under `root`. Returns the base names processed, in
/// order; each is also printed on stdout as it is written.
pub fn embed_all(root: &Path, layout: &Layout, mode: Mode) -> anyhow::Result<Vec<String>> {
    // 1. ── Escape & splice ────────────────────────────────────────────
    let embedded = processor::run(root, layout)
        .with_context(|| format!("Embedding builtins under {}", root.display()))?;

    // 2. ── Check only ─────────────────────────────────────────────────
    if mode == Mode::Check {
        let names = processor::stale(&embedded);
        if !names.is_empty() {
            return Err(EmbedError::Stale { names }.into());
        }
        info!("{} builtin(s) up to date", embedded.len());
        return Ok(embedded.into_iter().map(|e| e.name).collect());
    }

    // 3. ── Write outputs ──────────────────────────────────────────────
    let mut names = Vec::with_capacity(embedded.len());
    for e in embedded {
        writer::c::emit(&e).with_context(|| format!("Writing template for {}", e.name))?;
        writer::txt::emit(&e).with_context(|| format!("Writing constant for {}", e.name))?;
        println!("{}", e.name);
        names.push(e.name);
    }

    Ok(names)
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
