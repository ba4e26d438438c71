//! Completion requests: cursor classification, member and path completion.

pub mod engine;
pub mod paths;

pub use engine::{CompletionEngine, CursorContext, classify_line};
pub use paths::complete_module_path;

use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use crate::diagnostics::DiagnosticEvent;
use crate::imports::AmbientError;
use crate::parsing::ParseError;
use crate::types::CompletionEntry;

/// The document being edited, as handed over by the host.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    /// Location on disk; relative imports resolve against its directory
    pub path: &'a Path,
    pub text: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(path: &'a Path, text: &'a str) -> Self {
        Self { path, text }
    }

    pub fn directory(&self) -> Result<&'a Path, CompletionError> {
        self.path
            .parent()
            .ok_or_else(|| CompletionError::NoDirectory {
                path: self.path.display().to_string(),
            })
    }
}

/// Answer to one completion request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompletionResponse {
    pub items: Vec<CompletionEntry>,
    /// The host should suppress its own word and explicit completions
    pub inhibit_other_completions: bool,
    /// Diagnostic changes caused by this request
    pub diagnostic_events: Vec<DiagnosticEvent>,
}

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Offset {offset} is past the end of the document ({len} bytes)")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("Offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },

    #[error("Document {path} has no parent directory")]
    NoDirectory { path: String },
}

/// Failures while constructing an engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Parser(#[from] ParseError),

    #[error(transparent)]
    Ambient(#[from] AmbientError),
}
