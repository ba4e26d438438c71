//! Error types for module resolution.

use std::path::PathBuf;
use thiserror::Error;

use crate::diagnostics::DiagnosticKind;
use crate::parsing::ParseError;

/// Why an import could not be turned into an export table.
///
/// The `Display` text doubles as the diagnostic message shown on hover.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Import must be a relative path to a .js file")]
    InvalidImportPath { import_path: String },

    #[error("Module not found")]
    ModuleNotFound { path: PathBuf },

    #[error("Failed parsing module")]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Cannot read module: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            ResolveError::InvalidImportPath { .. } => DiagnosticKind::InvalidImportPath,
            ResolveError::ModuleNotFound { .. } | ResolveError::Io { .. } => {
                DiagnosticKind::ModuleNotFound
            }
            ResolveError::ParseFailure { .. } => DiagnosticKind::ParseFailure,
        }
    }

    /// Classify an I/O failure on `path`; `NotFound` becomes `ModuleNotFound`.
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ResolveError::ModuleNotFound { path }
        } else {
            ResolveError::Io { path, source }
        }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;
