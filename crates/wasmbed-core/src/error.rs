//! Error types for the wasmbed-core library.
//!
//! This module provides error handling using the `thiserror` crate,
//! with detailed error variants for different failure modes.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wasmbed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type for all wasmbed operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to read input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to create output directory
    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreate {
        /// Path to the directory that failed to create
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input path has no usable file name to derive symbols from
    #[error("cannot derive symbol names from path '{path}': no valid file name")]
    InvalidFileName {
        /// The offending path
        path: PathBuf,
    },
}

impl Error {
    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new file write error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a new directory creation error
    pub fn directory_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreate {
            path: path.into(),
            source,
        }
    }

    /// Creates a new invalid file name error
    pub fn invalid_file_name(path: impl Into<PathBuf>) -> Self {
        Self::InvalidFileName { path: path.into() }
    }
}
