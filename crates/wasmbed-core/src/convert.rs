//! File-to-file conversion.
//!
//! This is the whole pipeline in one place: read the module wholesale,
//! derive the symbol names, render the header text, write it wholesale.
//! There is no streaming and no partial output; either the output file
//! lands complete or an error is returned.

use crate::error::{Error, Result};
use crate::header::{HeaderRenderer, RenderConfig};
use crate::symbol::SymbolSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Summary of a completed conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The input path as given
    pub input: PathBuf,
    /// The path the header was written to
    pub output: PathBuf,
    /// Number of payload bytes embedded
    pub byte_count: usize,
    /// The identifiers emitted into the header
    pub symbols: SymbolSet,
}

/// Converts a module file into a C header with default rendering.
///
/// When `output` is `None`, the header lands at `<raw stem>.h` in the
/// current working directory. An existing file at the output path is
/// overwritten.
pub fn convert_file(input: impl AsRef<Path>, output: Option<&Path>) -> Result<Conversion> {
    convert_file_with_config(input, output, RenderConfig::default())
}

/// Converts a module file into a C header with custom rendering
pub fn convert_file_with_config(
    input: impl AsRef<Path>,
    output: Option<&Path>,
    config: RenderConfig,
) -> Result<Conversion> {
    let input = input.as_ref();

    trace!("Reading {}", input.display());
    let data = fs::read(input).map_err(|e| Error::file_read(input, e))?;
    debug!("Read {} bytes from {}", data.len(), input.display());

    let symbols = SymbolSet::from_path(input)?;
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => symbols.default_output_path(),
    };

    let rendered = HeaderRenderer::new(&symbols, &data)
        .with_config(config)
        .render();

    // An explicit output path may point into a directory that doesn't
    // exist yet
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| Error::directory_create(parent, e))?;
        }
    }

    fs::write(&output_path, &rendered)
        .map_err(|e| Error::file_write(&output_path, e))?;
    debug!(
        "Wrote {} ({} payload bytes)",
        output_path.display(),
        data.len()
    );

    Ok(Conversion {
        input: input.to_path_buf(),
        output: output_path,
        byte_count: data.len(),
        symbols,
    })
}
