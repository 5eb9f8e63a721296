//! Error types for registry loading and table compilation.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Every variant is
//! fatal: the batch aborts rather than emit a partially-correct table.

use std::path::PathBuf;

use mbindex_core::TableError;
use thiserror::Error;

/// Fatal error while loading or compiling an encoding index.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The registry file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the registry file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A registry record could not be parsed or violates record ordering.
    #[error("{file}:{line}: {message}")]
    Malformed {
        /// Registry file name.
        file: String,
        /// 1-based line number of the offending record.
        line: usize,
        /// What was wrong with the record.
        message: String,
    },

    /// A structural table error, tagged with the encoding being compiled.
    #[error("{encoding}: {source}")]
    Table {
        /// Canonical encoding name.
        encoding: &'static str,
        /// The underlying structural error.
        #[source]
        source: TableError,
    },

    /// A duplicate-region pointer whose scalar has no earlier occurrence.
    ///
    /// The corrigenda-mandated duplicate regions only make sense when the
    /// scalar stored there also appears at a lower pointer; an index where
    /// it does not is corrupt.
    #[error("{encoding}: pointer {pointer} carries U+{scalar:04X} with no earlier occurrence")]
    ImpossibleDuplicate {
        /// Canonical encoding name.
        encoding: &'static str,
        /// The duplicate-region pointer.
        pointer: usize,
        /// The scalar stored at that pointer.
        scalar: u16,
    },
}
