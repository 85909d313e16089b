//! Symbol derivation from input file names.
//!
//! The generated header declares two C symbols and an include guard, all
//! derived from the input module's base name. `-` and `.` are legal in
//! file names but not in C identifiers, so both map to `_`.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Identifiers derived from an input module's file name.
///
/// For an input `demo/my-lib.wasm`:
///
/// - array symbol: `my_lib_wasm`
/// - length symbol: `my_lib_wasm_len`
/// - include guard: `MY_LIB_H`
/// - default output: `my-lib.h` (raw stem, in the current directory)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    /// The input's base name, extension included (`my-lib.wasm`)
    source_name: String,
    /// Base name minus the final extension, characters untouched (`my-lib`)
    raw_stem: String,
    /// Sanitized stem used for the C identifiers (`my_lib`)
    stem: String,
}

impl SymbolSet {
    /// Derives the symbol set from an input path.
    ///
    /// Fails if the path has no file name component (e.g. `/` or a path
    /// ending in `..`), or if the file name is not valid UTF-8.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::invalid_file_name(path))?
            .to_string();

        // A leading-dot name like `.wasm` has no extension to strip,
        // so the whole name is the stem.
        let raw_stem = Path::new(&source_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&source_name)
            .to_string();

        let stem = raw_stem.replace(['-', '.'], "_");

        Ok(Self {
            source_name,
            raw_stem,
            stem,
        })
    }

    /// Returns the input's base name, extension included
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Returns the sanitized identifier stem
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Returns the name of the emitted byte array symbol
    pub fn array_name(&self) -> String {
        format!("{}_wasm", self.stem)
    }

    /// Returns the name of the emitted length symbol
    pub fn len_name(&self) -> String {
        format!("{}_wasm_len", self.stem)
    }

    /// Returns the include guard token (upper-cased stem, `_H` suffix)
    pub fn guard(&self) -> String {
        format!("{}_H", self.stem.to_uppercase())
    }

    /// Returns the default output path: `<raw stem>.h` in the current
    /// working directory, regardless of where the input lives.
    pub fn default_output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.h", self.raw_stem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_name() {
        let symbols = SymbolSet::from_path("foo.wasm").unwrap();
        assert_eq!(symbols.source_name(), "foo.wasm");
        assert_eq!(symbols.stem(), "foo");
        assert_eq!(symbols.array_name(), "foo_wasm");
        assert_eq!(symbols.len_name(), "foo_wasm_len");
        assert_eq!(symbols.guard(), "FOO_H");
        assert_eq!(symbols.default_output_path(), PathBuf::from("foo.h"));
    }

    #[test]
    fn test_dashes_and_dots_become_underscores() {
        let symbols = SymbolSet::from_path("my-lib.v2.wasm").unwrap();
        assert_eq!(symbols.stem(), "my_lib_v2");
        assert_eq!(symbols.array_name(), "my_lib_v2_wasm");
        assert_eq!(symbols.guard(), "MY_LIB_V2_H");
        // The default output keeps the raw stem untouched
        assert_eq!(symbols.default_output_path(), PathBuf::from("my-lib.v2.h"));
    }

    #[test]
    fn test_directories_are_ignored() {
        let symbols = SymbolSet::from_path("demo/target/app.wasm").unwrap();
        assert_eq!(symbols.source_name(), "app.wasm");
        assert_eq!(symbols.default_output_path(), PathBuf::from("app.h"));
    }

    #[test]
    fn test_leading_dot_name_keeps_whole_stem() {
        let symbols = SymbolSet::from_path(".wasm").unwrap();
        assert_eq!(symbols.stem(), "_wasm");
        assert_eq!(symbols.guard(), "_WASM_H");
        assert_eq!(symbols.default_output_path(), PathBuf::from(".wasm.h"));
    }

    #[test]
    fn test_no_extension() {
        let symbols = SymbolSet::from_path("module").unwrap();
        assert_eq!(symbols.stem(), "module");
        assert_eq!(symbols.default_output_path(), PathBuf::from("module.h"));
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        assert!(SymbolSet::from_path("/").is_err());
        assert!(SymbolSet::from_path("demo/..").is_err());
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let a = SymbolSet::from_path("x-y.wasm").unwrap();
        let b = SymbolSet::from_path("x-y.wasm").unwrap();
        assert_eq!(a, b);
    }
}
