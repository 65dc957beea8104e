//! # Grid Timeline Application Entry Point
//!
//! Thin CLI over the core library, matching the original tool's surface:
//! JSON comes from a file argument or stdin (`-`), and the PNG goes either
//! to a file path or to stdout as an unwrapped base64 string. Any richer
//! framing (JSON-RPC tools, HTTP routes) lives in external collaborators
//! that call the same library entry points.

// Test modules
#[cfg(test)]
mod tests;

use anyhow::Context;
use grid_timeline_lib::{config::Config, encode, grid_data, renderer};
use std::env;
use std::fs;
use std::io::Read;
use std::path::Path;

const USAGE: &str = "usage: grid-timeline <input.json|-> [output.png] [--base64]";

/// Parsed command line: input source, optional output path, delivery mode.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    input: Option<String>,
    output: Option<String>,
    base64: bool,
}

/// Scan arguments positionally: first non-flag is the input source, second
/// is the output path; `--base64` may appear anywhere.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> CliArgs {
    let mut parsed = CliArgs::default();
    for arg in args {
        if arg == "--base64" {
            parsed.base64 = true;
        } else if parsed.input.is_none() {
            parsed.input = Some(arg);
        } else if parsed.output.is_none() {
            parsed.output = Some(arg);
        }
    }
    parsed
}

/// Read the raw JSON record from a file path or stdin (`-`).
fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read JSON from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(source).with_context(|| format!("failed to read input file {}", source))
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is reserved for base64 delivery
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(env::args().skip(1));
    let source = args.input.as_deref().context(USAGE)?;

    let json = read_input(source)?;
    let model = grid_data::parse_str(&json)?;

    let config = Config::load();
    let pixmap = renderer::render(&model, chrono::Local::now(), &config)?;

    if args.base64 {
        println!("{}", encode::to_base64(&pixmap)?);
    } else {
        let path = args
            .output
            .unwrap_or_else(|| config.output.default_path.clone());
        encode::write_png(&pixmap, Path::new(&path))?;
        tracing::info!(path = %path, "image written");
    }

    Ok(())
}
