//! wasmbed - Embed WebAssembly modules as C byte-array headers
//!
//! This tool reads a compiled `.wasm` module and writes a C/C++ header
//! declaring its bytes as a static array plus a length constant, ready
//! to be compiled into a host program.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;
use wasmbed_core::convert_file;

/// Embed WebAssembly modules as C byte-array headers
#[derive(Parser, Debug)]
#[command(name = "wasmbed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the WASM module to embed
    input: PathBuf,

    /// Output header path (defaults to `<input stem>.h` in the current directory)
    output: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    if !cli.input.exists() {
        bail!("Input file does not exist: {}", cli.input.display());
    }
    if !cli.input.is_file() {
        bail!("Input path is not a file: {}", cli.input.display());
    }

    let summary = convert_file(&cli.input, cli.output.as_deref())
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    debug!("Include guard: {}", summary.symbols.guard());

    println!(
        "Converted {} ({} bytes) -> {}",
        summary.input.display(),
        summary.byte_count,
        summary.output.display()
    );
    println!("  Array name: {}", summary.symbols.array_name());
    println!("  Length var: {}", summary.symbols.len_name());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_is_optional() {
        let cli = Cli::try_parse_from(["wasmbed", "module.wasm"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("module.wasm"));
        assert!(cli.output.is_none());

        let cli = Cli::try_parse_from(["wasmbed", "module.wasm", "out/module.h"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out/module.h")));
    }

    #[test]
    fn test_missing_input_is_a_parse_error() {
        assert!(Cli::try_parse_from(["wasmbed"]).is_err());
    }
}
