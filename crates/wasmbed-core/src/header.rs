//! C header rendering for embedded module bytes.
//!
//! This module turns an opaque byte sequence and a [`SymbolSet`] into the
//! text of a C/C++ header: a `const unsigned char` array initializer with
//! one two-digit lowercase hex literal per byte, grouped into fixed-size
//! rows, followed by a `const unsigned int` length constant, the whole
//! thing wrapped in an `#ifndef` include guard.
//!
//! The payload is never inspected; rendering is a pure function of the
//! bytes and the derived symbol names.

use crate::symbol::SymbolSet;
use crate::BYTES_PER_ROW;
use std::fmt::{self, Write as FmtWrite};

/// Configuration for header rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of byte literals per row of the array initializer
    pub bytes_per_row: usize,
    /// Indentation string for array rows (default: 4 spaces)
    pub indent_str: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bytes_per_row: BYTES_PER_ROW,
            indent_str: "    ".to_string(),
        }
    }
}

impl RenderConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of byte literals per row (clamped to at least 1)
    pub fn bytes_per_row(mut self, n: usize) -> Self {
        self.bytes_per_row = n.max(1);
        self
    }

    /// Sets the indentation string
    pub fn indent_str(mut self, s: impl Into<String>) -> Self {
        self.indent_str = s.into();
        self
    }
}

/// Renders a byte sequence into C header text
#[derive(Debug)]
pub struct HeaderRenderer<'a> {
    symbols: &'a SymbolSet,
    data: &'a [u8],
    config: RenderConfig,
}

impl<'a> HeaderRenderer<'a> {
    /// Creates a new renderer with default configuration
    pub fn new(symbols: &'a SymbolSet, data: &'a [u8]) -> Self {
        Self {
            symbols,
            data,
            config: RenderConfig::default(),
        }
    }

    /// Creates a new renderer with custom config
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Renders the header as a string
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.write_to(&mut output).expect("String write cannot fail");
        output
    }

    /// Writes the rendered header to a writer
    pub fn write_to(&self, w: &mut impl FmtWrite) -> fmt::Result {
        let guard = self.symbols.guard();

        writeln!(w, "// Auto-generated from {}", self.symbols.source_name())?;
        writeln!(w, "// WASM module size: {} bytes", self.data.len())?;
        writeln!(w)?;
        writeln!(w, "#ifndef {}", guard)?;
        writeln!(w, "#define {}", guard)?;
        writeln!(w)?;
        writeln!(w, "const unsigned char {}[] = {{", self.symbols.array_name())?;

        for (row_index, row) in self.data.chunks(self.config.bytes_per_row).enumerate() {
            write!(w, "{}", self.config.indent_str)?;
            for (i, byte) in row.iter().enumerate() {
                if i > 0 {
                    write!(w, ", ")?;
                }
                write!(w, "0x{:02x}", byte)?;
            }
            // Every row but the last keeps a trailing comma
            let consumed = row_index * self.config.bytes_per_row + row.len();
            if consumed < self.data.len() {
                writeln!(w, ",")?;
            } else {
                writeln!(w)?;
            }
        }

        writeln!(w, "}};")?;
        writeln!(
            w,
            "const unsigned int {} = {};",
            self.symbols.len_name(),
            self.data.len()
        )?;
        writeln!(w)?;
        writeln!(w, "#endif // {}", guard)?;

        Ok(())
    }
}
