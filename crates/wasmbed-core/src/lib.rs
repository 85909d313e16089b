//! # wasmbed-core
//!
//! A library for embedding WebAssembly modules as C byte-array headers.
//!
//! This crate provides the core functionality for:
//! - Deriving C symbol names and an include guard from a module's file name
//! - Rendering the module bytes as a C array initializer
//! - Converting a module file into a header file in one step
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`symbol`]: Symbol and include-guard derivation
//! - [`header`]: C header rendering
//! - [`convert`]: File-to-file conversion
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use wasmbed_core::convert_file;
//!
//! // Embed module.wasm as module.h in the current directory
//! let summary = convert_file("module.wasm", None)?;
//!
//! println!(
//!     "{} bytes -> {} (as {})",
//!     summary.byte_count,
//!     summary.output.display(),
//!     summary.symbols.array_name(),
//! );
//! # Ok::<(), wasmbed_core::Error>(())
//! ```
//!
//! The payload is treated as opaque bytes; nothing about the WASM format
//! is parsed or validated.

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod convert;
pub mod error;
pub mod header;
pub mod symbol;

// Re-export primary types for convenience
pub use convert::{convert_file, convert_file_with_config, Conversion};
pub use error::{Error, Result};
pub use header::{HeaderRenderer, RenderConfig};
pub use symbol::SymbolSet;

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of byte literals per row of the array initializer
pub const BYTES_PER_ROW: usize = 12;
